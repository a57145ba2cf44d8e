//! REST implementation of the session store
//!
//! Talks to a PostgREST-style table API: one endpoint per table, filters in
//! the query string, `Prefer: return=representation` to get mutated rows
//! back. No retries and no timeout beyond the client defaults; a failed call
//! is terminal for that attempt.

use reqwest::{Client, Response, StatusCode};
use tracing::instrument;
use uuid::Uuid;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::{SessionDraft, SessionPatch, SessionRecord};
use crate::store::SessionStore;

/// Connection settings for the remote record store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the backend, e.g. `https://xyz.example.co`.
    pub base_url: String,
    /// API key, sent both as `apikey` and as a bearer token.
    pub api_key: String,
    /// Table holding the session records.
    pub table: String,
}

impl StoreConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: table.into(),
        }
    }
}

/// HTTP client for the remote session table.
#[derive(Debug)]
pub struct RestStore {
    client: Client,
    config: StoreConfig,
}

impl RestStore {
    /// Build a store client, rejecting an unconfigured backend up front so
    /// the caller can surface one blocking notice instead of failing on
    /// every call.
    pub fn new(config: StoreConfig) -> Result<Self> {
        if config.base_url.is_empty() || config.api_key.is_empty() {
            return Err(Error::StoreUnavailable(
                "store URL or API key not configured".to_string(),
            ));
        }
        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
    }

    /// Turn a non-success response into an `OperationFailed` with the status
    /// and whatever body the backend returned.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::OperationFailed(format!("{status}: {body}")))
    }
}

#[async_trait]
impl SessionStore for RestStore {
    #[instrument(skip(self))]
    async fn select_all(&self) -> Result<Vec<SessionRecord>> {
        let response = self
            .authed(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "date.asc")])
            .send()
            .await
            .map_err(|e| Error::StoreUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::StoreUnavailable(format!("{status}: {body}")));
        }

        Ok(response.json().await?)
    }

    #[instrument(skip(self, draft), fields(date = %draft.date))]
    async fn insert(&self, draft: &SessionDraft) -> Result<Vec<SessionRecord>> {
        let response = self
            .authed(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[draft])
            .send()
            .await
            .map_err(|e| Error::OperationFailed(e.to_string()))?;

        Ok(Self::check(response).await?.json().await?)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: Uuid, patch: &SessionPatch) -> Result<SessionRecord> {
        let response = self
            .authed(self.client.patch(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await
            .map_err(|e| Error::OperationFailed(e.to_string()))?;

        let rows: Vec<SessionRecord> = Self::check(response).await?.json().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| Error::OperationFailed(format!("no record with id {id}")))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<()> {
        let response = self
            .authed(self.client.delete(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| Error::OperationFailed(e.to_string()))?;

        // Deleting an absent id matches zero rows and succeeds.
        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::OperationFailed(format!("{status}: {body}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_strips_trailing_slash() {
        let store = RestStore::new(StoreConfig::new(
            "https://db.example.co/",
            "key",
            "lectures",
        ))
        .unwrap();
        assert_eq!(store.table_url(), "https://db.example.co/rest/v1/lectures");
    }

    #[test]
    fn test_unconfigured_store_is_rejected() {
        let err = RestStore::new(StoreConfig::new("", "", "lectures")).unwrap_err();
        assert!(matches!(err, Error::StoreUnavailable(_)));
    }
}
