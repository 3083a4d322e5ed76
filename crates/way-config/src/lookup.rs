//! Identity lookup service configuration.

use serde::{Deserialize, Serialize};

fn default_table() -> String {
    "etudiant".to_string()
}

fn default_key_column() -> String {
    "cin".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Base URL of the REST query service (e.g., `https://xyz.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// API key sent as both `apikey` and bearer token.
    #[serde(default)]
    pub api_key: String,

    /// Table holding identity records.
    #[serde(default = "default_table")]
    pub table: String,

    /// Column matched against the lookup key.
    #[serde(default = "default_key_column")]
    pub key_column: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: default_table(),
            key_column: default_key_column(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LookupConfig {
    /// Check if the service URL and key are both present.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.api_key.is_empty()
    }

    /// REST endpoint for the configured table, without query string.
    pub fn table_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}
