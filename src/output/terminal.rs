// Colored terminal output for check results and insights.
//
// This module handles all terminal-specific formatting: colors, ranked
// bars, advice lists. The main.rs display code delegates here.

use colored::{ColoredString, Colorize};

use super::truncate_chars;
use crate::api::{Article, CheckResult, UsageMetrics};
use crate::insights::InsightsSummary;
use crate::risk::{risk_ui, Tone};

fn toned(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Ok => text.bright_green(),
        Tone::Caution => text.bright_yellow(),
        Tone::Warning => text.yellow(),
        Tone::Danger => text.bright_red(),
        Tone::Neutral => text.normal(),
    }
}

/// Display a check or report outcome with its advice bundle.
pub fn display_check_result(result: &CheckResult) {
    let ui = risk_ui(result.kind(), result.level());

    println!();
    println!(
        "  {}  {}",
        toned(ui.label, ui.tone).bold(),
        result.subject().dimmed()
    );
    println!("  {}", ui.advice);

    let count = result.report_count();
    if count > 0 {
        println!("  Reports on record: {count}");
    }
    match result {
        CheckResult::Url(d) if d.phishing_flag => {
            println!("  {}", "Flagged as phishing".bright_red());
        }
        CheckResult::Email(d) => {
            if d.disposable {
                println!("  {}", "Disposable email domain".yellow());
            }
            if !d.mx_valid {
                println!("  {}", "Domain cannot receive mail (no MX records)".yellow());
            }
        }
        _ => {}
    }
    if let Some(source) = result.source() {
        println!("  Source: {}", source.dimmed());
    }
    if let Some(notes) = result.notes() {
        if !notes.trim().is_empty() {
            println!("  Notes: {}", truncate_chars(notes.trim(), 120).dimmed());
        }
    }

    println!();
    println!("  {}", "What to do:".bold());
    for action in ui.actions {
        println!("    - {action}");
    }
    println!();
}

/// Display the insights summary as two ranked bar lists.
pub fn display_insights(summary: &InsightsSummary) {
    println!(
        "\n{}",
        format!(
            "=== Scam Insights (last {} days) ===",
            summary.window_days
        )
        .bold()
    );

    println!("\n  {}", "Trending themes".bold());
    if summary.top_themes.is_empty() {
        println!("    No reports in the window.");
    } else {
        display_ranked(&summary.top_themes);
    }

    println!("\n  {}", "High-risk domains".bold());
    if summary.top_domains.is_empty() {
        println!("    No flagged domains in the window.");
    } else {
        display_ranked(&summary.top_domains);
    }
    println!();
}

fn display_ranked(entries: &[crate::insights::RankedEntry]) {
    let max = entries.iter().map(|e| e.count).max().unwrap_or(1).max(1);
    let bar_width: usize = 20;

    for (i, entry) in entries.iter().enumerate() {
        let filled = ((entry.count as f64 / max as f64) * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));
        println!(
            "    {:>2}. {:<32} {} {}",
            i + 1,
            truncate_chars(&entry.name, 30),
            bar.bright_blue(),
            entry.count
        );
    }
}

/// Display the articles listing.
pub fn display_articles(articles: &[Article]) {
    if articles.is_empty() {
        println!("No articles published yet.");
        return;
    }
    println!("\n{}", format!("=== Articles ({}) ===", articles.len()).bold());
    println!();
    for article in articles {
        println!("  {}", article.title.bold());
        if let Some(date) = &article.gmt_create {
            println!("    {}", date.dimmed());
        }
        if let Some(summary) = &article.summary {
            println!("    {}", truncate_chars(summary, 100));
        }
        println!("    {}", format!("slug: {}", article.slug).dimmed());
        println!();
    }
}

/// Display the usage metric.
pub fn display_metrics(metrics: &UsageMetrics) {
    match metrics.count {
        Some(count) => {
            println!("Checks in the last 7 days: {}", count.to_string().bold());
            if let Some(as_of) = &metrics.as_of {
                println!("As of: {}", as_of.dimmed());
            }
        }
        None => println!("Usage metrics are unavailable right now."),
    }
}
