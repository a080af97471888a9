// Check and report operations — typed wire shapes per endpoint.
//
// The check and report endpoints for a kind share one response shape, so
// each gets a single data struct. Numeric risk levels stay raw i64 on the
// wire types; display code converts through RiskLevel::from_ordinal so an
// out-of-range level renders as Unknown instead of failing.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::risk::{CheckKind, RiskLevel};
use crate::validate::MobileNumber;

/// Response data for URL check/report.
#[derive(Debug, Clone, Deserialize)]
pub struct UrlCheckData {
    pub url: String,
    #[serde(default)]
    pub risk_level: i64,
    #[serde(default)]
    pub phishing_flag: bool,
    #[serde(default)]
    pub report_count: i64,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Response data for email check/report.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailCheckData {
    pub address: String,
    #[serde(default)]
    pub risk_level: i64,
    #[serde(default)]
    pub mx_valid: bool,
    #[serde(default)]
    pub disposable: bool,
    #[serde(default)]
    pub report_count: i64,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Response data for mobile check/report.
#[derive(Debug, Clone, Deserialize)]
pub struct MobileCheckData {
    pub e164: String,
    #[serde(default)]
    pub risk_level: i64,
    #[serde(default)]
    pub report_count: i64,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A check or report outcome, unified for display.
#[derive(Debug, Clone)]
pub enum CheckResult {
    Url(UrlCheckData),
    Email(EmailCheckData),
    Mobile(MobileCheckData),
}

impl CheckResult {
    pub fn kind(&self) -> CheckKind {
        match self {
            CheckResult::Url(_) => CheckKind::Url,
            CheckResult::Email(_) => CheckKind::Email,
            CheckResult::Mobile(_) => CheckKind::Mobile,
        }
    }

    /// What was checked, as the backend normalized it.
    pub fn subject(&self) -> &str {
        match self {
            CheckResult::Url(d) => &d.url,
            CheckResult::Email(d) => &d.address,
            CheckResult::Mobile(d) => &d.e164,
        }
    }

    pub fn level(&self) -> RiskLevel {
        let ordinal = match self {
            CheckResult::Url(d) => d.risk_level,
            CheckResult::Email(d) => d.risk_level,
            CheckResult::Mobile(d) => d.risk_level,
        };
        RiskLevel::from_ordinal(ordinal)
    }

    pub fn report_count(&self) -> i64 {
        match self {
            CheckResult::Url(d) => d.report_count,
            CheckResult::Email(d) => d.report_count,
            CheckResult::Mobile(d) => d.report_count,
        }
    }

    pub fn notes(&self) -> Option<&str> {
        match self {
            CheckResult::Url(d) => d.notes.as_deref(),
            CheckResult::Email(d) => d.notes.as_deref(),
            CheckResult::Mobile(d) => d.notes.as_deref(),
        }
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            CheckResult::Url(d) => d.source.as_deref(),
            CheckResult::Email(d) => d.source.as_deref(),
            CheckResult::Mobile(d) => d.source.as_deref(),
        }
    }
}

// --- Request bodies ---

#[derive(Serialize)]
struct UrlBody<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    address: &'a str,
}

#[derive(Serialize)]
struct MobileBody<'a> {
    e164: &'a str,
    country_code: &'a str,
    national_number: &'a str,
}

impl<'a> From<&'a MobileNumber> for MobileBody<'a> {
    fn from(n: &'a MobileNumber) -> Self {
        MobileBody {
            e164: &n.e164,
            country_code: &n.country_code,
            national_number: &n.national_number,
        }
    }
}

impl ApiClient {
    pub async fn check_url(&self, url: &str) -> Result<UrlCheckData, ApiError> {
        self.post_enveloped("/api/v1/url/check", &UrlBody { url }).await
    }

    pub async fn check_email(&self, address: &str) -> Result<EmailCheckData, ApiError> {
        self.post_enveloped("/api/v1/email/check", &EmailBody { address })
            .await
    }

    pub async fn check_mobile(&self, number: &MobileNumber) -> Result<MobileCheckData, ApiError> {
        self.post_enveloped("/api/v1/mobile/check", &MobileBody::from(number))
            .await
    }

    pub async fn report_url(&self, url: &str) -> Result<UrlCheckData, ApiError> {
        self.post_enveloped("/api/v1/url/report", &UrlBody { url }).await
    }

    pub async fn report_email(&self, address: &str) -> Result<EmailCheckData, ApiError> {
        self.post_enveloped("/api/v1/email/report", &EmailBody { address })
            .await
    }

    pub async fn report_mobile(&self, number: &MobileNumber) -> Result<MobileCheckData, ApiError> {
        self.post_enveloped("/api/v1/mobile/report", &MobileBody::from(number))
            .await
    }
}
