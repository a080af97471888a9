// Risk level ordinals and check categories.
//
// The backend reports risk as an ordinal 0-3. Anything outside that range
// (including future levels we don't know about) maps to Unknown rather
// than failing — the display layer has an explicit bundle for it.

use serde::{Deserialize, Serialize};

/// The three kinds of identifier the backend can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Url,
    Email,
    Mobile,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Url => "url",
            CheckKind::Email => "email",
            CheckKind::Mobile => "mobile",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordinal risk level as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Safe,
    Low,
    Suspicious,
    Dangerous,
    /// Out-of-range or missing ordinal.
    Unknown,
}

impl RiskLevel {
    /// Map a backend ordinal to a level. Out-of-range values are Unknown.
    pub fn from_ordinal(ordinal: i64) -> Self {
        match ordinal {
            0 => RiskLevel::Safe,
            1 => RiskLevel::Low,
            2 => RiskLevel::Suspicious,
            3 => RiskLevel::Dangerous,
            _ => RiskLevel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Low => "Low",
            RiskLevel::Suspicious => "Suspicious",
            RiskLevel::Dangerous => "Dangerous",
            RiskLevel::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_map_in_range() {
        assert_eq!(RiskLevel::from_ordinal(0), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_ordinal(1), RiskLevel::Low);
        assert_eq!(RiskLevel::from_ordinal(2), RiskLevel::Suspicious);
        assert_eq!(RiskLevel::from_ordinal(3), RiskLevel::Dangerous);
    }

    #[test]
    fn out_of_range_is_unknown() {
        assert_eq!(RiskLevel::from_ordinal(-1), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_ordinal(4), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_ordinal(99), RiskLevel::Unknown);
    }
}
