//! Remote record store layer
//!
//! The trait defines the generic table interface, allowing for different
//! implementations (REST backend, in-memory fake for tests).

mod rest;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{SessionDraft, SessionPatch, SessionRecord};

pub use rest::{RestStore, StoreConfig};

/// Generic CRUD operations over the remote session table.
///
/// Any call may fail with a transport or configuration error; callers treat
/// those uniformly and never let them crash the surrounding surface.
#[async_trait]
pub trait SessionStore {
    /// All records, ordered by date ascending.
    async fn select_all(&self) -> Result<Vec<SessionRecord>>;

    /// Insert a draft; the store assigns the id and returns the inserted
    /// record(s).
    async fn insert(&self, draft: &SessionDraft) -> Result<Vec<SessionRecord>>;

    /// Partially update a record; returns the server's representation of the
    /// updated row.
    async fn update(&self, id: Uuid, patch: &SessionPatch) -> Result<SessionRecord>;

    /// Delete by id. Deleting an id that no longer exists is a no-op.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
