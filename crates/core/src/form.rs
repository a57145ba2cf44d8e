//! Session editing form
//!
//! UI-state shape for the create/edit surface, kept deliberately separate
//! from the persisted record shape. The custom-value toggles and their
//! free-text fields live only here; `to_draft` is the single projection
//! point into the persisted shape.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    SessionDraft, SessionPatch, SessionRecord, CATEGORIES, DEFAULT_CATEGORY, DEFAULT_LOCATION,
};

/// Whether submitting creates a new record or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Uuid),
}

#[derive(Debug, Clone)]
pub struct SessionForm {
    mode: FormMode,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    /// Fixed category choice; ignored while the custom toggle is on.
    pub category: String,
    pub category_custom: String,
    pub category_is_custom: bool,
    /// Free-text location; used only while the custom toggle is on.
    pub location_custom: String,
    pub location_is_custom: bool,
    pub attendees: Vec<String>,
    pub custom_attendees: String,
    pub content: String,
}

impl SessionForm {
    /// Blank form for a new session on the given date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            mode: FormMode::Create,
            date,
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            category_custom: String::new(),
            category_is_custom: false,
            location_custom: String::new(),
            location_is_custom: false,
            attendees: Vec::new(),
            custom_attendees: String::new(),
            content: String::new(),
        }
    }

    /// Form pre-filled from an existing record. The custom toggles engage
    /// exactly when the stored value is not the default location or not one
    /// of the fixed categories.
    pub fn for_record(record: &SessionRecord) -> Self {
        let location_is_custom = record.location != DEFAULT_LOCATION;
        let category_is_custom = !CATEGORIES.contains(&record.category.as_str());
        Self {
            mode: FormMode::Edit(record.id),
            date: record.date,
            start_time: record.start_time.clone(),
            end_time: record.end_time.clone(),
            category: if category_is_custom {
                DEFAULT_CATEGORY.to_string()
            } else {
                record.category.clone()
            },
            category_custom: if category_is_custom {
                record.category.clone()
            } else {
                String::new()
            },
            category_is_custom,
            location_custom: if location_is_custom {
                record.location.clone()
            } else {
                String::new()
            },
            location_is_custom,
            attendees: record.attendees.clone(),
            custom_attendees: record.custom_attendees.clone(),
            content: record.content.clone(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Add or remove a roster name. A name can only be selected once.
    pub fn toggle_attendee(&mut self, name: &str) {
        if let Some(pos) = self.attendees.iter().position(|a| a == name) {
            self.attendees.remove(pos);
        } else {
            self.attendees.push(name.to_string());
        }
    }

    /// Project the form state into the persisted shape. The custom toggles
    /// pick between the fixed and free-text values here, and nowhere else.
    pub fn to_draft(&self) -> SessionDraft {
        SessionDraft {
            date: self.date,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            location: if self.location_is_custom {
                self.location_custom.clone()
            } else {
                DEFAULT_LOCATION.to_string()
            },
            category: if self.category_is_custom {
                self.category_custom.clone()
            } else {
                self.category.clone()
            },
            attendees: self.attendees.clone(),
            custom_attendees: self.custom_attendees.clone(),
            content: self.content.clone(),
        }
    }

    /// Update payload for edit submissions: the form always replaces every
    /// field it owns.
    pub fn to_patch(&self) -> SessionPatch {
        SessionPatch::from_draft(self.to_draft())
    }
}
