// Central configuration loaded from environment variables.
//
// The .env file is loaded automatically at startup via dotenvy. Only the
// API base URL is required, and only for commands that talk to the
// backend — insights and status work fully offline.

use std::env;

use anyhow::Result;

use crate::api::client::DEFAULT_TIMEOUT_SECS;

pub struct Config {
    /// TrustLens backend base URL (TRUSTLENS_API_URL).
    pub api_url: String,
    /// Optional bearer token for gated deployments (TRUSTLENS_API_TOKEN).
    pub api_token: Option<String>,
    /// Path of the local report log (TRUSTLENS_DB_PATH).
    pub db_path: String,
    /// Directory holding the three risk CSVs (TRUSTLENS_DATA_DIR).
    pub data_dir: String,
    /// When set, load the risk CSVs from this base URL instead of disk
    /// (TRUSTLENS_DATA_URL).
    pub data_url: Option<String>,
    /// Client-side timeout for backend calls, seconds (TRUSTLENS_TIMEOUT_SECS).
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let timeout_secs = env::var("TRUSTLENS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_url: env::var("TRUSTLENS_API_URL").unwrap_or_default(),
            api_token: env::var("TRUSTLENS_API_TOKEN").ok(),
            db_path: env::var("TRUSTLENS_DB_PATH").unwrap_or_else(|_| "./trustlens.db".to_string()),
            data_dir: env::var("TRUSTLENS_DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            data_url: env::var("TRUSTLENS_DATA_URL").ok(),
            timeout_secs,
        })
    }

    /// Check that the backend URL is configured.
    /// Call this before any operation that talks to the backend.
    pub fn require_api(&self) -> Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!(
                "TRUSTLENS_API_URL not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
