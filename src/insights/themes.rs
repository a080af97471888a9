// Theme rules — named scam categories matched against record free text.
//
// The rule set is fixed for the lifetime of the process. Rules are not
// mutually exclusive: one record can increment several theme counters.

use regex_lite::Regex;
use std::sync::OnceLock;

use super::records::{EmailRecord, MobileRecord, UrlRecord};

/// A named scam category with its text pattern.
pub struct ThemeRule {
    pub name: &'static str,
    pattern: Regex,
}

impl ThemeRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        // Patterns are compile-time constants; a bad one is a programmer
        // error, so expect() here is fine.
        ThemeRule {
            name,
            pattern: Regex::new(pattern).expect("invalid theme pattern"),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// The fixed theme rule set.
pub fn theme_rules() -> &'static [ThemeRule] {
    static RULES: OnceLock<Vec<ThemeRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            ThemeRule::new(
                "Delivery fee",
                r"(?i)deliver|parcel|package|postage|courier|redelivery",
            ),
            ThemeRule::new(
                "Crypto giveaway",
                r"(?i)crypto|bitcoin|btc|airdrop|giveaway|double your",
            ),
            ThemeRule::new(
                "Tax refund",
                r"(?i)tax refund|tax office|ato|myGov|refund owed",
            ),
            ThemeRule::new(
                "Account suspension",
                r"(?i)suspend|account locked|verify your account|unusual activity",
            ),
            ThemeRule::new(
                "Prize draw",
                r"(?i)prize|winner|lottery|you've won|you have won",
            ),
        ]
    })
}

// The theme blob is the space-joined free-text-bearing fields of a record.
// Missing fields were already normalized to "" at the parse boundary.

pub fn url_blob(r: &UrlRecord) -> String {
    format!("{} {} {}", r.notes, r.url, r.domain)
}

pub fn email_blob(r: &EmailRecord) -> String {
    format!("{} {} {}", r.notes, r.address, r.domain)
}

pub fn mobile_blob(r: &MobileRecord) -> String {
    format!("{} {}", r.notes, r.e164)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_set_is_five_rules() {
        assert_eq!(theme_rules().len(), 5);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rules = theme_rules();
        let delivery = rules.iter().find(|r| r.name == "Delivery fee").unwrap();
        assert!(delivery.matches("Your PARCEL is waiting"));
        assert!(delivery.matches("pay a redelivery fee"));
        assert!(!delivery.matches("your invoice is attached"));
    }

    #[test]
    fn one_text_can_match_several_rules() {
        let text = "crypto giveaway plus a tax refund for you";
        let hits: Vec<_> = theme_rules()
            .iter()
            .filter(|r| r.matches(text))
            .map(|r| r.name)
            .collect();
        assert!(hits.contains(&"Crypto giveaway"));
        assert!(hits.contains(&"Tax refund"));
    }
}
