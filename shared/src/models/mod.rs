//! Record shapes exchanged with the fetch and render boundaries

mod forecast;
mod inventory;
mod sales;

pub use forecast::*;
pub use inventory::*;
pub use sales::*;
