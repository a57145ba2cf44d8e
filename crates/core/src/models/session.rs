//! Session record model
//!
//! `SessionRecord` mirrors the remote table row. `SessionDraft` is the same
//! shape without an id and is the only shape ever sent on create, so a
//! client-side id can never leak into an insert. `SessionPatch` carries a
//! partial field set for updates; unset fields stay off the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DEFAULT_CATEGORY;

/// One scheduled lecture/meeting entry.
///
/// `start_time`/`end_time` are `HH:mm` strings; no ordering invariant is
/// enforced between them (an end before the start is stored as given, which
/// permits overnight sessions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub category: String,
    pub attendees: Vec<String>,
    #[serde(default)]
    pub custom_attendees: String,
    #[serde(default)]
    pub content: String,
}

impl SessionRecord {
    /// Full attendee list for display: the fixed-roster selection followed by
    /// the comma-separated custom names, trimmed, with empty entries dropped.
    pub fn all_attendees(&self) -> Vec<String> {
        let mut names: Vec<String> = self.attendees.clone();
        names.extend(
            self.custom_attendees
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        );
        names
    }

    /// Category label, falling back to the fixed default when empty.
    pub fn category_label(&self) -> &str {
        if self.category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            &self.category
        }
    }

    /// `HH:mm ~ HH:mm` time range as it appears in the report.
    pub fn time_range(&self) -> String {
        format!("{} ~ {}", self.start_time, self.end_time)
    }
}

/// A session as submitted for creation, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDraft {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub category: String,
    pub attendees: Vec<String>,
    pub custom_attendees: String,
    pub content: String,
}

/// Partial update for an existing session. `None` fields are omitted from
/// the request body, so whatever is present overwrites and nothing else.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attendees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl SessionPatch {
    /// Patch that replaces every field from a draft.
    pub fn from_draft(draft: SessionDraft) -> Self {
        Self {
            date: Some(draft.date),
            start_time: Some(draft.start_time),
            end_time: Some(draft.end_time),
            location: Some(draft.location),
            category: Some(draft.category),
            attendees: Some(draft.attendees),
            custom_attendees: Some(draft.custom_attendees),
            content: Some(draft.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(attendees: &[&str], custom: &str) -> SessionRecord {
        SessionRecord {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            location: "가곡전수소".to_string(),
            category: String::new(),
            attendees: attendees.iter().map(|s| s.to_string()).collect(),
            custom_attendees: custom.to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn test_all_attendees_merges_and_trims() {
        let r = record(&["A", "B"], " C, ,D ");
        assert_eq!(r.all_attendees(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_all_attendees_empty_custom() {
        let r = record(&["A"], "");
        assert_eq!(r.all_attendees(), vec!["A"]);
    }

    #[test]
    fn test_category_falls_back_to_default() {
        let r = record(&[], "");
        assert_eq!(r.category_label(), "교육");
    }

    #[test]
    fn test_time_range_format() {
        let r = record(&[], "");
        assert_eq!(r.time_range(), "09:00 ~ 11:00");
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = SessionPatch {
            content: Some("x".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({ "content": "x" }));
    }

    #[test]
    fn test_record_wire_format() {
        let r = record(&["A"], "");
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["date"], "2026-03-10");
        assert_eq!(value["startTime"], "09:00");
        assert!(value["customAttendees"].is_string());
    }
}
