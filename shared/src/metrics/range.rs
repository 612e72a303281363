use crate::models::SalesRecord;
use crate::types::DateRange;

/// Select the records inside `range` (all records when `None`), newest first
pub fn filter_by_range(records: &[SalesRecord], range: Option<&DateRange>) -> Vec<SalesRecord> {
    let mut selected: Vec<SalesRecord> = records
        .iter()
        .filter(|record| range.map_or(true, |r| r.contains(record.date)))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    selected
}
