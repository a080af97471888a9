// Risk dataset records — one tagged variant per source CSV.
//
// The datasets are maintained by hand and every field must be treated as
// optional, untyped text. Coercion happens once, here, at the parse
// boundary; the aggregation logic downstream only sees well-formed types.
// A malformed CSV row is skipped, never fatal.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::StringRecord;
use std::collections::HashMap;
use tracing::debug;

/// A row from risk_url.csv.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub domain: String,
    pub url: String,
    pub phishing: bool,
    pub risk_level: i64,
    pub report_count: i64,
    pub last_reported_at: Option<DateTime<Utc>>,
    pub notes: String,
    pub deleted: bool,
}

/// A row from risk_email.csv.
#[derive(Debug, Clone)]
pub struct EmailRecord {
    pub address: String,
    pub domain: String,
    pub risk_level: i64,
    pub report_count: i64,
    pub last_reported_at: Option<DateTime<Utc>>,
    pub notes: String,
    pub deleted: bool,
}

/// A row from risk_mobile.csv.
#[derive(Debug, Clone)]
pub struct MobileRecord {
    pub e164: String,
    pub risk_level: i64,
    pub report_count: i64,
    pub last_reported_at: Option<DateTime<Utc>>,
    pub notes: String,
    pub deleted: bool,
}

/// Boolean coercion for flag columns.
///
/// True only for "1", "true" or "yes" after trimming and lowercasing.
/// Everything else — empty, "0", "no", "maybe" — is false.
pub fn coerce_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Integer coercion for ordinal/count columns. Non-numeric is 0.
pub fn coerce_int(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// Parse a last-reported timestamp.
///
/// Accepts RFC 3339, naive date-times with a space or `T` separator, and
/// bare dates (taken as midnight UTC). Anything else is None — records
/// without a parseable timestamp fail closed out of the recency window.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

// --- CSV parsing ---

/// Column positions resolved from a header row, case-insensitively.
struct Columns(HashMap<String, usize>);

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let map = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_lowercase(), i))
            .collect();
        Columns(map)
    }

    /// Fetch a field by column name; missing column or cell is "".
    fn field<'a>(&self, record: &'a StringRecord, name: &str) -> &'a str {
        self.0
            .get(name)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
            .trim()
    }
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes())
}

/// Parse risk_url.csv content. Rows that fail to decode are skipped.
pub fn parse_url_records(text: &str) -> Result<Vec<UrlRecord>> {
    let mut rdr = reader(text);
    let cols = Columns::from_headers(rdr.headers().context("risk_url.csv has no header row")?);

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!(error = %e, "skipping malformed url row");
                continue;
            }
        };
        records.push(UrlRecord {
            domain: cols.field(&row, "domain").to_string(),
            url: cols.field(&row, "url").to_string(),
            phishing: coerce_flag(cols.field(&row, "phishing_flag")),
            risk_level: coerce_int(cols.field(&row, "risk_level")),
            report_count: coerce_int(cols.field(&row, "report_count")),
            last_reported_at: parse_timestamp(cols.field(&row, "last_reported_at")),
            notes: cols.field(&row, "notes").to_string(),
            deleted: coerce_flag(cols.field(&row, "is_deleted")),
        });
    }
    Ok(records)
}

/// Parse risk_email.csv content. Rows that fail to decode are skipped.
pub fn parse_email_records(text: &str) -> Result<Vec<EmailRecord>> {
    let mut rdr = reader(text);
    let cols = Columns::from_headers(rdr.headers().context("risk_email.csv has no header row")?);

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!(error = %e, "skipping malformed email row");
                continue;
            }
        };
        records.push(EmailRecord {
            address: cols.field(&row, "address").to_string(),
            domain: cols.field(&row, "domain").to_string(),
            risk_level: coerce_int(cols.field(&row, "risk_level")),
            report_count: coerce_int(cols.field(&row, "report_count")),
            last_reported_at: parse_timestamp(cols.field(&row, "last_reported_at")),
            notes: cols.field(&row, "notes").to_string(),
            deleted: coerce_flag(cols.field(&row, "is_deleted")),
        });
    }
    Ok(records)
}

/// Parse risk_mobile.csv content. Rows that fail to decode are skipped.
pub fn parse_mobile_records(text: &str) -> Result<Vec<MobileRecord>> {
    let mut rdr = reader(text);
    let cols = Columns::from_headers(rdr.headers().context("risk_mobile.csv has no header row")?);

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!(error = %e, "skipping malformed mobile row");
                continue;
            }
        };
        records.push(MobileRecord {
            e164: cols.field(&row, "e164").to_string(),
            risk_level: coerce_int(cols.field(&row, "risk_level")),
            report_count: coerce_int(cols.field(&row, "report_count")),
            last_reported_at: parse_timestamp(cols.field(&row, "last_reported_at")),
            notes: cols.field(&row, "notes").to_string(),
            deleted: coerce_flag(cols.field(&row, "is_deleted")),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_truthy_forms() {
        for v in ["1", "true", "yes", "TRUE", " Yes "] {
            assert!(coerce_flag(v), "{v:?} should coerce true");
        }
    }

    #[test]
    fn flag_falsy_forms() {
        for v in ["0", "false", "no", "", "maybe", " null "] {
            assert!(!coerce_flag(v), "{v:?} should coerce false");
        }
    }

    #[test]
    fn int_coercion_defaults_to_zero() {
        assert_eq!(coerce_int("3"), 3);
        assert_eq!(coerce_int(" 2 "), 2);
        assert_eq!(coerce_int("high"), 0);
        assert_eq!(coerce_int(""), 0);
    }

    #[test]
    fn timestamp_formats() {
        assert!(parse_timestamp("2026-07-01T10:30:00Z").is_some());
        assert!(parse_timestamp("2026-07-01T10:30:00+10:00").is_some());
        assert!(parse_timestamp("2026-07-01 10:30:00").is_some());
        assert!(parse_timestamp("2026-07-01").is_some());
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn url_rows_parse_by_header_name() {
        let csv = "url,domain,risk_level,phishing_flag,last_reported_at,notes,is_deleted\n\
                   https://scam.example/x,scam.example,3,1,2026-07-01,fake parcel,0\n";
        let rows = parse_url_records(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].domain, "scam.example");
        assert!(rows[0].phishing);
        assert_eq!(rows[0].risk_level, 3);
        // report_count column absent entirely — coerces to 0
        assert_eq!(rows[0].report_count, 0);
        assert!(!rows[0].deleted);
    }

    #[test]
    fn short_rows_do_not_abort_parsing() {
        let csv = "domain,url,risk_level,notes\n\
                   a.com,https://a.com,2,delivery fee owed\n\
                   b.com\n";
        let rows = parse_url_records(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].domain, "b.com");
        assert_eq!(rows[1].risk_level, 0);
    }
}
