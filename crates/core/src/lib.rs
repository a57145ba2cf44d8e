//! Lectio Core Library
//!
//! Models, record store client, repository, grouping, calendar grid and
//! report generation for the Lectio session scheduler.

pub mod calendar;
pub mod error;
pub mod form;
pub mod grouping;
pub mod models;
pub mod report;
pub mod repository;
pub mod store;

pub use calendar::{day_action, DayAction, DayCell, MonthGrid};
pub use error::{Error, Result};
pub use form::{FormMode, SessionForm};
pub use grouping::{group_by_month, month_label, MonthGroup};
pub use models::*;
pub use report::{generate, report_file_name, ReportTable};
pub use repository::SessionRepository;
pub use store::{RestStore, SessionStore, StoreConfig};
