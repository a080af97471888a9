// Client-side input validation — the last stop before the network layer.
//
// Malformed input is rejected locally with a user-facing message; only
// values that pass here are ever sent to the backend. Validation is
// deliberately lenient about cosmetics (spacing, missing scheme) and
// strict about shape.

use anyhow::{bail, Result};
use regex_lite::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Default region for national-format numbers (AU).
const DEFAULT_COUNTRY_CODE: &str = "61";

/// Country calling codes we can split from an E.164 string. Longest
/// match wins; anything not listed falls back to a two-digit split.
const COUNTRY_CODES: &[&str] = &[
    "1", "7", "20", "27", "31", "33", "34", "39", "44", "49", "55", "61", "62", "63", "64", "65",
    "66", "81", "82", "86", "91", "92", "94", "234", "254", "353", "358", "380", "420", "852",
    "880", "886", "971", "972",
];

/// A parsed mobile number, split the way the backend wants it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileNumber {
    pub e164: String,
    pub country_code: String,
    pub national_number: String,
}

/// Validate a URL for checking. A missing scheme is assumed https.
pub fn validate_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("enter a link to check");
    }
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let parsed = match url::Url::parse(&candidate) {
        Ok(parsed) => parsed,
        Err(_) => bail!("that doesn't look like a valid link"),
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("only http and https links can be checked");
    }
    match parsed.host_str() {
        Some(host) if host.contains('.') => Ok(candidate),
        _ => bail!("that doesn't look like a valid link"),
    }
}

/// Validate an email address for checking.
pub fn validate_email(raw: &str) -> Result<String> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email pattern")
    });

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("enter an email address to check");
    }
    if !re.is_match(trimmed) {
        bail!("that doesn't look like a valid email address");
    }
    Ok(trimmed.to_string())
}

/// Parse a mobile number into E.164 parts.
///
/// Accepts international format (+614...) or a national 0-prefixed number
/// interpreted in the default region.
pub fn parse_mobile(raw: &str) -> Result<MobileNumber> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect();

    if cleaned.is_empty() {
        bail!("enter a mobile number to check");
    }

    if let Some(digits) = cleaned.strip_prefix('+') {
        if digits.len() < 8 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
            bail!("that doesn't look like a valid mobile number");
        }
        if digits.starts_with('0') {
            bail!("that doesn't look like a valid mobile number");
        }
        let country_code = split_country_code(digits);
        let national_number = &digits[country_code.len()..];
        if national_number.is_empty() {
            bail!("that doesn't look like a valid mobile number");
        }
        return Ok(MobileNumber {
            e164: format!("+{digits}"),
            country_code: country_code.to_string(),
            national_number: national_number.to_string(),
        });
    }

    if cleaned.starts_with('0') && cleaned.chars().all(|c| c.is_ascii_digit()) {
        let national = &cleaned[1..];
        if national.len() < 8 || national.len() > 10 {
            bail!("that doesn't look like a valid mobile number");
        }
        return Ok(MobileNumber {
            e164: format!("+{DEFAULT_COUNTRY_CODE}{national}"),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            national_number: national.to_string(),
        });
    }

    bail!("enter the number in international format (+61...) or starting with 0");
}

/// Longest country-code prefix of the digit string, falling back to the
/// first two digits for codes outside the table.
fn split_country_code(digits: &str) -> &str {
    for len in (1..=3).rev() {
        if digits.len() > len && COUNTRY_CODES.contains(&&digits[..len]) {
            return &digits[..len];
        }
    }
    &digits[..2.min(digits.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_accepts_bare_domain() {
        assert_eq!(validate_url("example.com/x").unwrap(), "https://example.com/x");
    }

    #[test]
    fn url_keeps_explicit_scheme() {
        assert_eq!(
            validate_url(" http://example.com ").unwrap(),
            "http://example.com"
        );
    }

    #[test]
    fn url_rejects_junk() {
        assert!(validate_url("").is_err());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("localhost").is_err());
    }

    #[test]
    fn email_accept_reject() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email(" user@example.com ").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@host").is_err());
        assert!(validate_email("two words@example.com").is_err());
    }

    #[test]
    fn mobile_international_splits_country_code() {
        let n = parse_mobile("+61 412 345 678").unwrap();
        assert_eq!(n.e164, "+61412345678");
        assert_eq!(n.country_code, "61");
        assert_eq!(n.national_number, "412345678");
    }

    #[test]
    fn mobile_national_assumes_default_region() {
        let n = parse_mobile("0412 345 678").unwrap();
        assert_eq!(n.e164, "+61412345678");
        assert_eq!(n.country_code, "61");
    }

    #[test]
    fn mobile_three_digit_code() {
        let n = parse_mobile("+971501234567").unwrap();
        assert_eq!(n.country_code, "971");
        assert_eq!(n.national_number, "501234567");
    }

    #[test]
    fn mobile_rejects_junk() {
        assert!(parse_mobile("").is_err());
        assert!(parse_mobile("hello").is_err());
        assert!(parse_mobile("+123").is_err());
        assert!(parse_mobile("+0412345678").is_err());
        assert!(parse_mobile("12345").is_err());
    }
}
