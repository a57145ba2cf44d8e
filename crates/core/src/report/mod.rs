//! Report document generation
//!
//! Transforms the session records into a grouped, merged-cell tabular
//! `.docx` document: one centered title, one table with a fixed six-column
//! header, one data row per record, and the month column vertically merged
//! across each month group.

mod docx;
mod table;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::grouping::group_by_month;
use crate::models::SessionRecord;

pub use table::{MergeDirective, MonthCell, ReportRow, ReportTable, COLUMN_HEADERS};

/// Generate the report document for the given records.
///
/// Fails with [`Error::EmptyReport`] before any serialization work when
/// `records` is empty; the caller surfaces a user-facing notice instead of
/// producing a file.
pub fn generate(records: &[SessionRecord], title: &str) -> Result<Vec<u8>> {
    if records.is_empty() {
        return Err(Error::EmptyReport);
    }
    let groups = group_by_month(records);
    let table = ReportTable::from_groups(&groups);
    docx::serialize(title, &table)
}

/// Download file name: `<prefix>_<YYYYMMDD>.docx`, dated by generation day.
pub fn report_file_name(prefix: &str, generated_on: NaiveDate) -> String {
    format!("{}_{}.docx", prefix, generated_on.format("%Y%m%d"))
}
