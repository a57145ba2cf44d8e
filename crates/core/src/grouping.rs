//! Month grouping and chronological sort
//!
//! Shared by the list view and the report generator: records are sorted by
//! date (stable on ties) and partitioned into maximal runs sharing a
//! calendar month. Months with no records never appear.

use chrono::{Datelike, NaiveDate};

use crate::models::SessionRecord;

/// A maximal run of chronologically sorted records sharing a month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub label: String,
    pub records: Vec<SessionRecord>,
}

/// Month label as it appears in views and the report, e.g. `3월`.
pub fn month_label(date: NaiveDate) -> String {
    format!("{}월", date.month())
}

/// Sort records by date ascending and partition them into month groups in
/// chronological order of first occurrence.
pub fn group_by_month(records: &[SessionRecord]) -> Vec<MonthGroup> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.date);

    let mut groups: Vec<MonthGroup> = Vec::new();
    for record in sorted {
        let label = month_label(record.date);
        match groups.last_mut() {
            Some(group) if group.label == label => group.records.push(record),
            _ => groups.push(MonthGroup {
                label,
                records: vec![record],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn record(date: &str) -> SessionRecord {
        SessionRecord {
            id: Uuid::new_v4(),
            date: date.parse().unwrap(),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            location: "가곡전수소".to_string(),
            category: "교육".to_string(),
            attendees: Vec::new(),
            custom_attendees: String::new(),
            content: String::new(),
        }
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_by_month(&[]).is_empty());
    }

    #[test]
    fn test_groups_partition_the_sorted_input() {
        let records = vec![
            record("2026-04-02"),
            record("2026-03-10"),
            record("2026-03-21"),
            record("2026-04-01"),
            record("2026-03-15"),
        ];
        let groups = group_by_month(&records);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "3월");
        assert_eq!(groups[1].label, "4월");
        assert_eq!(groups[0].records.len(), 3);
        assert_eq!(groups[1].records.len(), 2);

        // Concatenating groups reproduces the input sorted by date, with
        // every record in exactly one group.
        let flattened: Vec<_> = groups
            .iter()
            .flat_map(|g| g.records.iter().map(|r| r.date))
            .collect();
        let mut sorted: Vec<_> = records.iter().map(|r| r.date).collect();
        sorted.sort();
        assert_eq!(flattened, sorted);
    }

    #[test]
    fn test_group_order_follows_earliest_record() {
        let groups = group_by_month(&[record("2026-05-01"), record("2026-02-10")]);
        assert_eq!(groups[0].label, "2월");
        assert_eq!(groups[1].label, "5월");
    }

    #[test]
    fn test_same_date_records_stay_together() {
        let a = record("2026-03-10");
        let b = record("2026-03-10");
        let groups = group_by_month(&[a.clone(), b.clone()]);
        assert_eq!(groups[0].records, vec![a, b]);
    }

    #[test]
    fn test_month_label_has_no_zero_pad() {
        assert_eq!(month_label("2026-03-01".parse().unwrap()), "3월");
        assert_eq!(month_label("2026-11-01".parse().unwrap()), "11월");
    }
}
