//! Calendar grid builder
//!
//! Pure date arithmetic over the cached records: one cell per day of the
//! reference month, plus the leading pad that aligns the first day with its
//! weekday column (Sunday = 0).

use chrono::{Datelike, Days, NaiveDate};

use crate::models::SessionRecord;

/// One day cell of the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Number of sessions recorded on this date.
    pub session_count: usize,
}

impl DayCell {
    pub fn has_sessions(&self) -> bool {
        self.session_count > 0
    }

    /// Indicator marks to render: one when the day has a session, a second
    /// (differently styled by the view) when it has more than one. Never
    /// more than two.
    pub fn badge_marks(&self) -> usize {
        self.session_count.min(2)
    }
}

/// What clicking a day should open.
#[derive(Debug, Clone, PartialEq)]
pub enum DayAction {
    /// No sessions on the date: open the create surface pre-filled with it.
    Create(NaiveDate),
    /// At least one session: edit the first, in repository order.
    Edit(Box<SessionRecord>),
}

/// Resolve the click action for a date given the repository's sessions for
/// that date.
pub fn day_action(date: NaiveDate, day_sessions: &[SessionRecord]) -> DayAction {
    match day_sessions.first() {
        Some(first) => DayAction::Edit(Box::new(first.clone())),
        None => DayAction::Create(date),
    }
}

/// Grid of one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1, equal to its weekday index (Sunday = 0).
    pub leading_pad: usize,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Build the grid for `year`/`month`. Returns `None` for an invalid
    /// month number.
    pub fn build(year: i32, month: u32, records: &[SessionRecord]) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let leading_pad = first.weekday().num_days_from_sunday() as usize;

        let mut days = Vec::with_capacity(31);
        let mut date = first;
        while date.month() == month {
            days.push(DayCell {
                date,
                session_count: records.iter().filter(|r| r.date == date).count(),
            });
            date = date.checked_add_days(Days::new(1))?;
        }

        Some(Self {
            year,
            month,
            leading_pad,
            days,
        })
    }
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
    fn test_grid_shape_for_march_2026() {
        // 2026-03-01 is a Sunday.
        let grid = MonthGrid::build(2026, 3, &[]).unwrap();
        assert_eq!(grid.leading_pad, 0);
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.days[0].date, "2026-03-01".parse().unwrap());
    }

    #[test]
    fn test_leading_pad_is_weekday_of_first_day() {
        // 2026-04-01 is a Wednesday.
        let grid = MonthGrid::build(2026, 4, &[]).unwrap();
        assert_eq!(grid.leading_pad, 3);
        assert_eq!(grid.days.len(), 30);
    }

    #[test]
    fn test_session_counts_and_badges() {
        let records = vec![
            record("2026-03-10"),
            record("2026-03-10"),
            record("2026-03-10"),
            record("2026-03-12"),
        ];
        let grid = MonthGrid::build(2026, 3, &records).unwrap();

        let day10 = &grid.days[9];
        assert_eq!(day10.session_count, 3);
        assert_eq!(day10.badge_marks(), 2);

        let day12 = &grid.days[11];
        assert!(day12.has_sessions());
        assert_eq!(day12.badge_marks(), 1);

        assert!(!grid.days[0].has_sessions());
        assert_eq!(grid.days[0].badge_marks(), 0);
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert!(MonthGrid::build(2026, 13, &[]).is_none());
    }

    #[test]
    fn test_day_action_edits_first_or_creates() {
        let date = "2026-03-10".parse().unwrap();
        let a = record("2026-03-10");
        let b = record("2026-03-10");

        match day_action(date, &[a.clone(), b]) {
            DayAction::Edit(record) => assert_eq!(record.id, a.id),
            other => panic!("expected edit action, got {other:?}"),
        }
        assert_eq!(day_action(date, &[]), DayAction::Create(date));
    }
}
