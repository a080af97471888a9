// Unit tests for dataset record parsing and coercion.
//
// The datasets are hand-maintained CSVs: every field is optional text
// and coercion must be forgiving. These tests pin the coercion truth
// tables and the header-name-based (not positional) parsing.

use trustlens::insights::records::{
    coerce_flag, coerce_int, parse_email_records, parse_mobile_records, parse_timestamp,
    parse_url_records,
};

// ============================================================
// coerce_flag — truth table
// ============================================================

#[test]
fn flag_true_forms() {
    for v in ["1", "true", "yes", "TRUE", " Yes ", "YES", "True"] {
        assert!(coerce_flag(v), "{v:?} should coerce to true");
    }
}

#[test]
fn flag_false_forms() {
    for v in ["0", "false", "no", "", "maybe", "y", "on", "2", " ", "null", "undefined"] {
        assert!(!coerce_flag(v), "{v:?} should coerce to false");
    }
}

// ============================================================
// coerce_int — defaults to zero
// ============================================================

#[test]
fn int_parses_plain_numbers() {
    assert_eq!(coerce_int("0"), 0);
    assert_eq!(coerce_int("3"), 3);
    assert_eq!(coerce_int(" 12 "), 12);
    assert_eq!(coerce_int("-1"), -1);
}

#[test]
fn int_non_numeric_is_zero() {
    assert_eq!(coerce_int(""), 0);
    assert_eq!(coerce_int("high"), 0);
    assert_eq!(coerce_int("3.5"), 0);
}

// ============================================================
// parse_timestamp — accepted formats and fail-closed behavior
// ============================================================

#[test]
fn timestamp_rfc3339() {
    assert!(parse_timestamp("2026-07-15T08:30:00Z").is_some());
    assert!(parse_timestamp("2026-07-15T08:30:00+10:00").is_some());
}

#[test]
fn timestamp_naive_forms() {
    assert!(parse_timestamp("2026-07-15T08:30:00").is_some());
    assert!(parse_timestamp("2026-07-15 08:30:00").is_some());
    assert!(parse_timestamp("2026-07-15").is_some());
}

#[test]
fn timestamp_date_only_is_midnight_utc() {
    let ts = parse_timestamp("2026-07-15").unwrap();
    assert_eq!(ts.to_rfc3339(), "2026-07-15T00:00:00+00:00");
}

#[test]
fn timestamp_garbage_is_none() {
    assert!(parse_timestamp("not-a-date").is_none());
    assert!(parse_timestamp("15/07/2026").is_none());
    assert!(parse_timestamp("").is_none());
    assert!(parse_timestamp("   ").is_none());
}

// ============================================================
// CSV parsing — header-named columns, order independent
// ============================================================

#[test]
fn url_csv_parses_all_fields() {
    let csv = "domain,url,phishing_flag,risk_level,report_count,last_reported_at,notes,is_deleted\n\
               scam.example,https://scam.example/pay,1,3,17,2026-07-20T10:00:00Z,fake parcel fee,0\n";
    let rows = parse_url_records(csv).unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.domain, "scam.example");
    assert_eq!(row.url, "https://scam.example/pay");
    assert!(row.phishing);
    assert_eq!(row.risk_level, 3);
    assert_eq!(row.report_count, 17);
    assert!(row.last_reported_at.is_some());
    assert_eq!(row.notes, "fake parcel fee");
    assert!(!row.deleted);
}

#[test]
fn url_csv_column_order_does_not_matter() {
    let a = "domain,risk_level\nscam.example,3\n";
    let b = "risk_level,domain\n3,scam.example\n";
    let rows_a = parse_url_records(a).unwrap();
    let rows_b = parse_url_records(b).unwrap();
    assert_eq!(rows_a[0].domain, rows_b[0].domain);
    assert_eq!(rows_a[0].risk_level, rows_b[0].risk_level);
}

#[test]
fn url_csv_missing_columns_coerce_to_defaults() {
    let csv = "domain\nscam.example\n";
    let rows = parse_url_records(csv).unwrap();
    let row = &rows[0];
    assert!(!row.phishing);
    assert_eq!(row.risk_level, 0);
    assert_eq!(row.report_count, 0);
    assert!(row.last_reported_at.is_none());
    assert_eq!(row.notes, "");
    assert!(!row.deleted);
}

#[test]
fn email_csv_parses() {
    let csv = "address,domain,risk_level,last_reported_at,notes,is_deleted\n\
               scam@bad.example,bad.example,2,2026-07-20,prize winner text,no\n";
    let rows = parse_email_records(csv).unwrap();
    assert_eq!(rows[0].address, "scam@bad.example");
    assert_eq!(rows[0].risk_level, 2);
    assert!(!rows[0].deleted);
}

#[test]
fn mobile_csv_parses() {
    let csv = "e164,risk_level,report_count,last_reported_at,notes,is_deleted\n\
               +61400000001,3,9,2026-07-20,ato impersonation call,0\n";
    let rows = parse_mobile_records(csv).unwrap();
    assert_eq!(rows[0].e164, "+61400000001");
    assert_eq!(rows[0].report_count, 9);
}

#[test]
fn headers_match_case_insensitively() {
    let csv = "Domain,Risk_Level\nscam.example,3\n";
    let rows = parse_url_records(csv).unwrap();
    assert_eq!(rows[0].domain, "scam.example");
    assert_eq!(rows[0].risk_level, 3);
}

#[test]
fn empty_body_parses_to_no_rows() {
    let rows = parse_url_records("domain,url\n").unwrap();
    assert!(rows.is_empty());
}
