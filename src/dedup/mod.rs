// Best-effort report deduplication.
//
// Suppresses duplicate scam reports for the same normalized value within
// 24 hours, using a local SQLite log of value hashes. This is NOT a
// security or anti-abuse control: it's a convenience cache scoped to one
// machine, trivially cleared by the user. Real duplicate enforcement is
// the backend's job.
//
// Storage failure degrades to "never already reported" rather than
// blocking the user — the report still goes through to the backend.

pub mod store;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::risk::CheckKind;
use store::SqliteStore;

/// Normalize a submitted value so trivial variants hash identically.
///
/// Everything is trimmed and lowercased. URLs additionally lose a leading
/// http(s) scheme and a leading www. label, and runs of slashes collapse
/// to one.
pub fn normalize(kind: CheckKind, value: &str) -> String {
    let mut text = value.trim().to_lowercase();
    if kind == CheckKind::Url {
        for scheme in ["https://", "http://"] {
            if let Some(rest) = text.strip_prefix(scheme) {
                text = rest.to_string();
                break;
            }
        }
        if let Some(rest) = text.strip_prefix("www.") {
            text = rest.to_string();
        }
        while text.contains("//") {
            text = text.replace("//", "/");
        }
    }
    text
}

/// SHA-256 of the normalized text, as lowercase hex.
pub fn hash_value(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    hex::encode(digest)
}

/// The local report log — normalize + hash + 24h-windowed store.
pub struct ReportLog {
    store: Option<SqliteStore>,
}

impl ReportLog {
    /// Open the log at the given path. An unopenable or corrupt database
    /// is treated as an empty log, not an error.
    pub fn open(db_path: &str) -> Self {
        let store = match SqliteStore::open(db_path) {
            Ok(store) => Some(store),
            Err(e) => {
                warn!(error = %e, path = db_path, "report log unavailable, dedup disabled");
                None
            }
        };
        Self { store }
    }

    /// For tests: wrap an already-opened store.
    pub fn with_store(store: SqliteStore) -> Self {
        Self { store: Some(store) }
    }

    /// True iff an unexpired entry with the matching hash exists.
    ///
    /// An empty normalized value never blocks — emptiness validation is a
    /// separate concern.
    pub async fn is_already_reported(&self, kind: CheckKind, value: &str) -> bool {
        let normalized = normalize(kind, value);
        if normalized.is_empty() {
            return false;
        }
        let Some(store) = &self.store else {
            return false;
        };
        match store.contains(&hash_value(&normalized), Utc::now()).await {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, "report log read failed, treating as not reported");
                false
            }
        }
    }

    /// Number of unexpired entries, for status displays. Storage failure
    /// reads as zero.
    pub async fn entry_count(&self, now: DateTime<Utc>) -> i64 {
        let Some(store) = &self.store else {
            return 0;
        };
        store.len(now).await.unwrap_or(0)
    }

    /// Record (or refresh) a report of the value. Failures are swallowed:
    /// the log is best-effort and must never block a submission.
    pub async fn mark_reported(&self, kind: CheckKind, value: &str) {
        let normalized = normalize(kind, value);
        if normalized.is_empty() {
            return;
        }
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store
            .insert(&hash_value(&normalized), kind.as_str(), Utc::now())
            .await
        {
            warn!(error = %e, "report log write failed");
        }
    }
}
