// Unit tests for insights aggregation.
//
// Everything here is pure: records are built directly and "now" is
// pinned, so the recency window and rankings are fully deterministic.

use chrono::{DateTime, Duration, TimeZone, Utc};
use trustlens::insights::records::{EmailRecord, MobileRecord, UrlRecord};
use trustlens::insights::{aggregate, InsightsParams};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
}

fn url_row(domain: &str, risk_level: i64, phishing: bool, notes: &str) -> UrlRecord {
    UrlRecord {
        domain: domain.to_string(),
        url: format!("https://{domain}/x"),
        phishing,
        risk_level,
        report_count: 0,
        last_reported_at: Some(now() - Duration::days(1)),
        notes: notes.to_string(),
        deleted: false,
    }
}

fn email_row(address: &str, notes: &str) -> EmailRecord {
    EmailRecord {
        address: address.to_string(),
        domain: address.split('@').nth(1).unwrap_or("").to_string(),
        risk_level: 1,
        report_count: 0,
        last_reported_at: Some(now() - Duration::days(1)),
        notes: notes.to_string(),
        deleted: false,
    }
}

fn mobile_row(e164: &str, notes: &str) -> MobileRecord {
    MobileRecord {
        e164: e164.to_string(),
        risk_level: 1,
        report_count: 0,
        last_reported_at: Some(now() - Duration::days(1)),
        notes: notes.to_string(),
        deleted: false,
    }
}

fn params(days: u32, limit: usize) -> InsightsParams {
    InsightsParams { days, limit }
}

// ============================================================
// Recency window
// ============================================================

#[test]
fn thirteen_days_old_is_inside_a_fourteen_day_window() {
    let mut row = url_row("a.com", 3, false, "");
    row.last_reported_at = Some(now() - Duration::days(13));
    let summary = aggregate(&[row], &[], &[], &params(14, 10), now());
    assert_eq!(summary.top_domains.len(), 1);
}

#[test]
fn fifteen_days_old_is_outside_a_fourteen_day_window() {
    let mut row = url_row("a.com", 3, false, "");
    row.last_reported_at = Some(now() - Duration::days(15));
    let summary = aggregate(&[row], &[], &[], &params(14, 10), now());
    assert!(summary.top_domains.is_empty());
}

#[test]
fn missing_timestamp_fails_closed() {
    let mut row = url_row("a.com", 3, false, "parcel fee");
    row.last_reported_at = None;
    let summary = aggregate(&[row], &[], &[], &params(14, 10), now());
    assert!(summary.top_domains.is_empty());
    assert!(summary.top_themes.is_empty());
}

#[test]
fn deleted_rows_are_excluded_everywhere() {
    let mut row = url_row("a.com", 3, true, "crypto giveaway");
    row.deleted = true;
    let summary = aggregate(&[row], &[], &[], &params(14, 10), now());
    assert!(summary.top_domains.is_empty());
    assert!(summary.top_themes.is_empty());
}

// ============================================================
// Domain ranking
// ============================================================

#[test]
fn domain_ranking_is_deterministic() {
    let rows = vec![
        url_row("a.com", 3, false, ""),
        url_row("b.com", 0, true, ""),
        url_row("a.com", 3, false, ""),
        url_row("b.com", 0, true, ""),
        url_row("a.com", 3, false, ""),
    ];
    let summary = aggregate(&rows, &[], &[], &params(14, 2), now());
    let ranked: Vec<(&str, u64)> = summary
        .top_domains
        .iter()
        .map(|e| (e.name.as_str(), e.count))
        .collect();
    assert_eq!(ranked, vec![("a.com", 3), ("b.com", 2)]);
}

#[test]
fn low_risk_unflagged_domains_do_not_rank() {
    let rows = vec![url_row("benign.com", 2, false, "")];
    let summary = aggregate(&rows, &[], &[], &params(14, 10), now());
    assert!(summary.top_domains.is_empty());
}

#[test]
fn domains_are_trimmed_and_lowercased() {
    let mut row = url_row("  SCAM.Example ", 3, false, "");
    row.domain = "  SCAM.Example ".to_string();
    let summary = aggregate(&[row], &[], &[], &params(14, 10), now());
    assert_eq!(summary.top_domains[0].name, "scam.example");
}

#[test]
fn empty_domain_is_skipped() {
    let mut row = url_row("", 3, true, "");
    row.domain = "   ".to_string();
    let summary = aggregate(&[row], &[], &[], &params(14, 10), now());
    assert!(summary.top_domains.is_empty());
}

#[test]
fn domain_list_respects_limit() {
    let rows: Vec<_> = (0..5)
        .map(|i| url_row(&format!("d{i}.com"), 3, false, ""))
        .collect();
    let summary = aggregate(&rows, &[], &[], &params(14, 2), now());
    assert_eq!(summary.top_domains.len(), 2);
}

// ============================================================
// Theme ranking
// ============================================================

#[test]
fn one_record_can_increment_two_themes() {
    let rows = vec![url_row(
        "a.com",
        0,
        false,
        "crypto giveaway and a tax refund waiting",
    )];
    let summary = aggregate(&rows, &[], &[], &params(14, 10), now());
    let names: Vec<&str> = summary.top_themes.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"Crypto giveaway"));
    assert!(names.contains(&"Tax refund"));
    for entry in &summary.top_themes {
        assert_eq!(entry.count, 1);
    }
}

#[test]
fn themes_count_across_all_three_collections() {
    let urls = vec![url_row("a.com", 0, false, "your parcel is held")];
    let emails = vec![email_row("x@y.com", "parcel redelivery fee")];
    let mobiles = vec![mobile_row("+61400000001", "missed parcel delivery")];
    let summary = aggregate(&urls, &emails, &mobiles, &params(14, 10), now());
    let delivery = summary
        .top_themes
        .iter()
        .find(|e| e.name == "Delivery fee")
        .expect("delivery theme present");
    assert_eq!(delivery.count, 3);
}

#[test]
fn theme_matches_record_identity_fields_not_just_notes() {
    // The blob includes the address/domain, so a scammy address alone hits.
    let emails = vec![email_row("prize@lottery-winner.example", "")];
    let summary = aggregate(&[], &emails, &[], &params(14, 10), now());
    let names: Vec<&str> = summary.top_themes.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"Prize draw"));
}

#[test]
fn theme_ties_keep_rule_hit_order() {
    // Both themes have one hit; the one hit first stays first.
    let urls = vec![
        url_row("a.com", 0, false, "account locked, verify your account"),
        url_row("b.com", 0, false, "bitcoin airdrop"),
    ];
    let summary = aggregate(&urls, &[], &[], &params(14, 10), now());
    let names: Vec<&str> = summary.top_themes.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Account suspension", "Crypto giveaway"]);
}

#[test]
fn empty_inputs_produce_empty_summary() {
    let summary = aggregate(&[], &[], &[], &params(14, 10), now());
    assert!(summary.top_themes.is_empty());
    assert!(summary.top_domains.is_empty());
    assert_eq!(summary.window_days, 14);
}
