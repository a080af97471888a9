// Ranked aggregation over the three risk datasets.
//
// Pure function of its inputs plus a single "now" snapshot — no I/O, and
// it never errors: a record with every field missing simply contributes
// to no counters. Callers must only invoke this once all three datasets
// have loaded (the loader enforces the all-or-nothing join).

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;

use super::records::{EmailRecord, MobileRecord, UrlRecord};
use super::themes::{email_blob, mobile_blob, theme_rules, url_blob};

/// URL rows at or above this risk level count toward domain ranking even
/// without a phishing flag.
const DOMAIN_RISK_FLOOR: i64 = 3;

/// Aggregation parameters.
#[derive(Debug, Clone, Copy)]
pub struct InsightsParams {
    /// Trailing recency window in days.
    pub days: u32,
    /// Cap on each ranked list.
    pub limit: usize,
}

impl Default for InsightsParams {
    fn default() -> Self {
        Self { days: 14, limit: 10 }
    }
}

impl InsightsParams {
    /// The short list shown in the landing-page peek widget.
    pub const PEEK_LIMIT: usize = 3;
}

/// One entry in a ranked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: u64,
}

/// The two ranked summaries derived from the datasets.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsSummary {
    pub top_themes: Vec<RankedEntry>,
    pub top_domains: Vec<RankedEntry>,
    pub window_days: u32,
}

/// Counter that remembers first-seen order so equal counts rank stably.
#[derive(Default)]
struct RankedCounter {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl RankedCounter {
    fn bump(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(n) => *n += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
                self.order.push(key.to_string());
            }
        }
    }

    /// Descending by count; ties keep first-seen order (stable sort over
    /// the insertion-ordered list).
    fn into_ranked(self, limit: usize) -> Vec<RankedEntry> {
        let mut entries: Vec<RankedEntry> = self
            .order
            .into_iter()
            .map(|name| {
                let count = self.counts[&name];
                RankedEntry { name, count }
            })
            .collect();
        entries.sort_by_key(|e| std::cmp::Reverse(e.count));
        entries.truncate(limit);
        entries
    }
}

/// Produce the top-N scam themes and high-risk domains within the window.
pub fn aggregate(
    urls: &[UrlRecord],
    emails: &[EmailRecord],
    mobiles: &[MobileRecord],
    params: &InsightsParams,
    now: DateTime<Utc>,
) -> InsightsSummary {
    // One cutoff for the whole run — every record sees the same window.
    let cutoff = now - Duration::seconds(i64::from(params.days) * 86_400);
    let in_window =
        |ts: &Option<DateTime<Utc>>| -> bool { matches!(ts, Some(t) if *t >= cutoff) };

    let mut themes = RankedCounter::default();
    let mut domains = RankedCounter::default();

    let mut tally_themes = |blob: String| {
        for rule in theme_rules() {
            if rule.matches(&blob) {
                themes.bump(rule.name);
            }
        }
    };

    for r in urls {
        if r.deleted || !in_window(&r.last_reported_at) {
            continue;
        }
        tally_themes(url_blob(r));
    }
    for r in emails {
        if r.deleted || !in_window(&r.last_reported_at) {
            continue;
        }
        tally_themes(email_blob(r));
    }
    for r in mobiles {
        if r.deleted || !in_window(&r.last_reported_at) {
            continue;
        }
        tally_themes(mobile_blob(r));
    }

    for r in urls {
        if r.deleted || !in_window(&r.last_reported_at) {
            continue;
        }
        if !r.phishing && r.risk_level < DOMAIN_RISK_FLOOR {
            continue;
        }
        let domain = r.domain.trim().to_lowercase();
        if domain.is_empty() {
            continue;
        }
        domains.bump(&domain);
    }

    InsightsSummary {
        top_themes: themes.into_ranked(params.limit),
        top_domains: domains.into_ranked(params.limit),
        window_days: params.days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_counter_tie_keeps_first_seen_order() {
        let mut c = RankedCounter::default();
        c.bump("b.com");
        c.bump("a.com");
        c.bump("a.com");
        c.bump("c.com");
        // a.com: 2, b.com: 1, c.com: 1 — b.com was seen before c.com
        let ranked = c.into_ranked(10);
        let names: Vec<&str> = ranked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn ranked_counter_truncates_to_limit() {
        let mut c = RankedCounter::default();
        for key in ["a", "b", "c", "d"] {
            c.bump(key);
        }
        assert_eq!(c.into_ranked(2).len(), 2);
    }
}
