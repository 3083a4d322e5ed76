//! # way-lookup
//!
//! Resolves an identity key (national id) to the person's record through a
//! PostgREST-style query endpoint, so a front-end can route them to their
//! assigned room.
//!
//! ```no_run
//! # async fn demo() -> Result<(), way_lookup::LookupError> {
//! let config = way_config::LookupConfig {
//!     url: "https://demo.supabase.co".into(),
//!     api_key: "anon-key".into(),
//!     ..Default::default()
//! };
//! let client = way_lookup::LookupClient::from_config(&config)?;
//! let record = client.find("AB123456").await?;
//! println!("{} -> {}", record.full_name(), record.salle);
//! # Ok(())
//! # }
//! ```

mod error;
mod http;
mod record;

pub use error::LookupError;
pub use record::IdentityRecord;

use std::time::Duration;

use way_config::LookupConfig;

use crate::http::check_response;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the identity table.
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    endpoint: String,
    key_column: String,
    api_key: String,
}

impl LookupClient {
    /// Build a client from the `[lookup]` config section.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotConfigured`] when the URL or API key is missing,
    /// [`LookupError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        if !config.is_configured() {
            return Err(LookupError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("wayfinder/0.1")
            .build()?;
        Ok(Self {
            http,
            endpoint: config.table_endpoint(),
            key_column: config.key_column.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Query URL for `key`. The key is percent-encoded.
    #[must_use]
    pub fn query_url(&self, key: &str) -> String {
        format!(
            "{}?{}=eq.{}",
            self.endpoint,
            self.key_column,
            urlencoding::encode(key)
        )
    }

    /// Fetch the first record whose key column equals `key`.
    ///
    /// # Errors
    ///
    /// [`LookupError::EmptyKey`] for a blank key, [`LookupError::NotFound`]
    /// for an empty result set, [`LookupError::Api`] or
    /// [`LookupError::Http`] when the request itself fails.
    pub async fn find(&self, key: &str) -> Result<IdentityRecord, LookupError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(LookupError::EmptyKey);
        }

        let url = self.query_url(key);
        tracing::debug!(%url, "looking up identity record");
        let resp = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let records: Vec<IdentityRecord> = resp.json().await?;
        if records.len() > 1 {
            tracing::warn!(key, count = records.len(), "key matched several records, using the first");
        }
        records.into_iter().next().ok_or_else(|| LookupError::NotFound {
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> LookupConfig {
        LookupConfig {
            url: "https://demo.supabase.co/".into(),
            api_key: "anon-key".into(),
            ..Default::default()
        }
    }

    #[test]
    fn unconfigured_client_is_rejected() {
        let err = LookupClient::from_config(&LookupConfig::default()).unwrap_err();
        assert!(matches!(err, LookupError::NotConfigured));
    }

    #[test]
    fn query_url_encodes_key() {
        let client = LookupClient::from_config(&configured()).unwrap();
        assert_eq!(
            client.query_url("AB 12&x"),
            "https://demo.supabase.co/rest/v1/etudiant?cin=eq.AB%2012%26x"
        );
    }

    #[tokio::test]
    async fn blank_key_is_rejected_before_any_request() {
        let client = LookupClient::from_config(&configured()).unwrap();
        assert!(matches!(client.find("   ").await, Err(LookupError::EmptyKey)));
    }
}
