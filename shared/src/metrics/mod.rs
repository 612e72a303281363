//! Derived metrics over fetched records
//!
//! Every function here is pure: inputs are borrowed, outputs are new values.
//! Aggregates that depend on ordering expect the newest-first order produced
//! by [`filter_by_range`].

mod aggregate;
mod change;
mod export;
mod overrides;
mod range;
mod summary;

pub use aggregate::*;
pub use change::*;
pub use export::*;
pub use overrides::*;
pub use range::*;
pub use summary::*;
