//! Structured report table
//!
//! Intermediate layer between month groups and the document serializer. Each
//! row carries named column values plus an explicit merge directive for the
//! month column, so the serializer cannot misalign columns by relying on
//! push order, and tests can assert the merge structure without unpacking
//! document bytes.

use crate::grouping::MonthGroup;
use crate::models::SessionRecord;

/// Fixed table header, one label per column.
pub const COLUMN_HEADERS: [&str; 6] = ["월", "날짜", "시간", "장소", "참석자", "구분"];

/// Vertical merge directive for the month column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDirective {
    /// First row of a month group; carries the label and opens the merge.
    Start,
    /// Later row of the group; empty cell joined into the one above.
    Continue,
}

/// The month column of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCell {
    /// Label text; empty on `Continue` rows.
    pub label: String,
    pub merge: MergeDirective,
}

/// One data row with every column value named.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub month: MonthCell,
    pub date: String,
    pub time: String,
    pub location: String,
    pub attendees: String,
    pub category: String,
}

impl ReportRow {
    fn build(record: &SessionRecord, month: MonthCell) -> Self {
        Self {
            month,
            date: record.date.format("%m-%d").to_string(),
            time: record.time_range(),
            location: record.location.clone(),
            attendees: record.all_attendees().join(", "),
            category: record.category_label().to_string(),
        }
    }
}

/// All data rows of the report, in grouped chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn from_groups(groups: &[MonthGroup]) -> Self {
        let mut rows = Vec::new();
        for group in groups {
            for (index, record) in group.records.iter().enumerate() {
                let month = if index == 0 {
                    MonthCell {
                        label: group.label.clone(),
                        merge: MergeDirective::Start,
                    }
                } else {
                    MonthCell {
                        label: String::new(),
                        merge: MergeDirective::Continue,
                    }
                };
                rows.push(ReportRow::build(record, month));
            }
        }
        Self { rows }
    }
}
