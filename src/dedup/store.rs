// SQLite backing for the report log.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is
// !Send. Methods lock the mutex, do synchronous rusqlite work, and return;
// the lock is never held across .await points.
//
// Every read prunes entries older than 24 hours first, which bounds
// growth without a background sweep. Methods take `now` explicitly so
// tests can age entries deterministically.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection};
use tokio::sync::Mutex;

/// How long an entry suppresses re-reporting.
const ENTRY_TTL_HOURS: i64 = 24;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (creating if needed) the report log at the given path.
    pub fn open(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("failed to open report log at {db_path}"))?;
        create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory report log")?;
        create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// True iff an unexpired entry with this hash exists.
    pub async fn contains(&self, value_hash: &str, now: DateTime<Utc>) -> Result<bool> {
        let conn = self.conn.lock().await;
        prune(&conn, now)?;
        let mut stmt = conn.prepare("SELECT 1 FROM report_log WHERE value_hash = ?1")?;
        let found = stmt.exists(params![value_hash])?;
        Ok(found)
    }

    /// Insert or refresh an entry (last-write-wins on the hash).
    pub async fn insert(&self, value_hash: &str, kind: &str, now: DateTime<Utc>) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO report_log (value_hash, kind, reported_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(value_hash) DO UPDATE SET kind = ?2, reported_at = ?3",
            params![value_hash, kind, now.to_rfc3339()],
        )?;
        Ok(())
    }

    /// Number of unexpired entries.
    pub async fn len(&self, now: DateTime<Utc>) -> Result<i64> {
        let conn = self.conn.lock().await;
        prune(&conn, now)?;
        let count = conn.query_row("SELECT COUNT(*) FROM report_log", [], |row| row.get(0))?;
        Ok(count)
    }

    /// For tests: backdate an entry's timestamp.
    pub async fn age_entry(&self, value_hash: &str, reported_at: DateTime<Utc>) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "UPDATE report_log SET reported_at = ?2 WHERE value_hash = ?1",
            params![value_hash, reported_at.to_rfc3339()],
        )?;
        Ok(())
    }
}

fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Hashes of recently reported values. One row per normalized value.
        CREATE TABLE IF NOT EXISTS report_log (
            value_hash TEXT PRIMARY KEY,
            kind TEXT NOT NULL,
            reported_at TEXT NOT NULL
        );
        ",
    )
    .context("failed to create report_log table")?;
    Ok(())
}

/// Drop entries older than the TTL. RFC 3339 UTC strings compare
/// lexicographically in time order, so string comparison is enough.
fn prune(conn: &Connection, now: DateTime<Utc>) -> Result<()> {
    let cutoff = (now - Duration::hours(ENTRY_TTL_HOURS)).to_rfc3339();
    conn.execute(
        "DELETE FROM report_log WHERE reported_at < ?1",
        params![cutoff],
    )?;
    Ok(())
}
