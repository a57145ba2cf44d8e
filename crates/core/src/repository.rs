//! Session repository
//!
//! In-memory cache over the remote record store. The cache is rebuilt
//! wholesale on `fetch_all` and patched incrementally after each successful
//! mutation; it is never mutated before the remote call succeeds, so a
//! failed call leaves prior state intact and there is nothing to roll back.
//! The store is injected, which keeps the repository testable against an
//! in-memory fake.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{SessionDraft, SessionPatch, SessionRecord};
use crate::store::SessionStore;

pub struct SessionRepository<S: SessionStore> {
    store: S,
    cache: Vec<SessionRecord>,
}

impl<S: SessionStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: Vec::new(),
        }
    }

    /// Replace the whole cache with the store's current contents, ordered by
    /// date ascending. On failure the cache is left as it was.
    pub async fn fetch_all(&mut self) -> Result<()> {
        match self.store.select_all().await {
            Ok(records) => {
                self.cache = records;
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to fetch sessions: {e}");
                Err(e)
            }
        }
    }

    /// Create a session. The draft carries no id, so the store assigns one;
    /// the returned record(s) are appended to the cache.
    pub async fn add(&mut self, draft: SessionDraft) -> Result<()> {
        match self.store.insert(&draft).await {
            Ok(inserted) => {
                self.cache.extend(inserted);
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to add session: {e}");
                Err(e)
            }
        }
    }

    /// Partially update a session. The cached record is replaced with the
    /// server's returned representation, not a local merge, so fields the
    /// server computes stay consistent.
    pub async fn update(&mut self, id: Uuid, patch: SessionPatch) -> Result<()> {
        match self.store.update(id, &patch).await {
            Ok(updated) => {
                if let Some(slot) = self.cache.iter_mut().find(|r| r.id == id) {
                    *slot = updated;
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to update session {id}: {e}");
                Err(e)
            }
        }
    }

    /// Delete a session by id. Deleting an id the store no longer has is a
    /// no-op, matching the store's delete-by-filter semantics.
    pub async fn delete(&mut self, id: Uuid) -> Result<()> {
        match self.store.delete(id).await {
            Ok(()) => {
                self.cache.retain(|r| r.id != id);
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to delete session {id}: {e}");
                Err(e)
            }
        }
    }

    /// All cached records for an exact date, in cache order.
    pub fn by_date(&self, date: NaiveDate) -> Vec<SessionRecord> {
        self.cache.iter().filter(|r| r.date == date).cloned().collect()
    }

    /// Snapshot of the cache for views and the report generator.
    pub fn records(&self) -> &[SessionRecord] {
        &self.cache
    }
}
