// Fixed display bundles for every (kind, level) pair.
//
// Pure static data — no computation, no external input. The lookup is
// total: every kind has a bundle for all four ordinal levels plus the
// Unknown fallback, so display code never has to handle a missing entry.

use super::level::{CheckKind, RiskLevel};

/// Styling token consumed by terminal and web rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Caution,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Ok => "ok",
            Tone::Caution => "caution",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Neutral => "neutral",
        }
    }
}

/// Display bundle for a check result.
#[derive(Debug, Clone, Copy)]
pub struct RiskUi {
    pub label: &'static str,
    pub advice: &'static str,
    pub actions: &'static [&'static str],
    pub tone: Tone,
}

/// Look up the display bundle for a (kind, level) pair.
pub fn risk_ui(kind: CheckKind, level: RiskLevel) -> &'static RiskUi {
    match (kind, level) {
        (CheckKind::Url, RiskLevel::Safe) => &URL_SAFE,
        (CheckKind::Url, RiskLevel::Low) => &URL_LOW,
        (CheckKind::Url, RiskLevel::Suspicious) => &URL_SUSPICIOUS,
        (CheckKind::Url, RiskLevel::Dangerous) => &URL_DANGEROUS,
        (CheckKind::Url, RiskLevel::Unknown) => &URL_UNKNOWN,
        (CheckKind::Email, RiskLevel::Safe) => &EMAIL_SAFE,
        (CheckKind::Email, RiskLevel::Low) => &EMAIL_LOW,
        (CheckKind::Email, RiskLevel::Suspicious) => &EMAIL_SUSPICIOUS,
        (CheckKind::Email, RiskLevel::Dangerous) => &EMAIL_DANGEROUS,
        (CheckKind::Email, RiskLevel::Unknown) => &EMAIL_UNKNOWN,
        (CheckKind::Mobile, RiskLevel::Safe) => &MOBILE_SAFE,
        (CheckKind::Mobile, RiskLevel::Low) => &MOBILE_LOW,
        (CheckKind::Mobile, RiskLevel::Suspicious) => &MOBILE_SUSPICIOUS,
        (CheckKind::Mobile, RiskLevel::Dangerous) => &MOBILE_DANGEROUS,
        (CheckKind::Mobile, RiskLevel::Unknown) => &MOBILE_UNKNOWN,
    }
}

// --- URL bundles ---

static URL_SAFE: RiskUi = RiskUi {
    label: "No known reports",
    advice: "This link has no scam reports against it. Stay alert anyway.",
    actions: &[
        "Check the address bar matches the site you expected",
        "Never enter passwords reached from an unsolicited message",
    ],
    tone: Tone::Ok,
};

static URL_LOW: RiskUi = RiskUi {
    label: "Low risk",
    advice: "A small number of reports exist for this link.",
    actions: &[
        "Avoid entering personal or payment details",
        "Navigate to the site directly instead of following the link",
    ],
    tone: Tone::Caution,
};

static URL_SUSPICIOUS: RiskUi = RiskUi {
    label: "Suspicious",
    advice: "This link shows patterns consistent with known scams.",
    actions: &[
        "Do not enter any details on this site",
        "Close the page and verify through an official channel",
        "Report it if you received it in a message",
    ],
    tone: Tone::Warning,
};

static URL_DANGEROUS: RiskUi = RiskUi {
    label: "Dangerous",
    advice: "This link is a confirmed phishing or scam site.",
    actions: &[
        "Do not open this link",
        "If you entered a password there, change it now",
        "Warn whoever sent it to you",
    ],
    tone: Tone::Danger,
};

static URL_UNKNOWN: RiskUi = RiskUi {
    label: "Unknown",
    advice: "We couldn't rate this link. Treat it with care.",
    actions: &["Verify the site through an official channel before using it"],
    tone: Tone::Neutral,
};

// --- Email bundles ---

static EMAIL_SAFE: RiskUi = RiskUi {
    label: "No known reports",
    advice: "This address has no scam reports against it.",
    actions: &[
        "Be wary of unexpected attachments or payment requests",
        "Check the sender domain matches the organisation",
    ],
    tone: Tone::Ok,
};

static EMAIL_LOW: RiskUi = RiskUi {
    label: "Low risk",
    advice: "A small number of reports exist for this address.",
    actions: &[
        "Don't reply with personal details",
        "Contact the organisation via its published address instead",
    ],
    tone: Tone::Caution,
};

static EMAIL_SUSPICIOUS: RiskUi = RiskUi {
    label: "Suspicious",
    advice: "This address shows patterns consistent with known scams.",
    actions: &[
        "Do not reply or click links in the email",
        "Mark it as spam",
        "Report it so others are warned",
    ],
    tone: Tone::Warning,
};

static EMAIL_DANGEROUS: RiskUi = RiskUi {
    label: "Dangerous",
    advice: "This address is a confirmed scam sender.",
    actions: &[
        "Delete the email without replying",
        "If you shared bank details, contact your bank immediately",
        "Block the sender",
    ],
    tone: Tone::Danger,
};

static EMAIL_UNKNOWN: RiskUi = RiskUi {
    label: "Unknown",
    advice: "We couldn't rate this address. Treat it with care.",
    actions: &["Verify the sender through an official channel before replying"],
    tone: Tone::Neutral,
};

// --- Mobile bundles ---

static MOBILE_SAFE: RiskUi = RiskUi {
    label: "No known reports",
    advice: "This number has no scam reports against it.",
    actions: &[
        "Never share one-time codes over the phone",
        "Hang up and call back on a published number if unsure",
    ],
    tone: Tone::Ok,
};

static MOBILE_LOW: RiskUi = RiskUi {
    label: "Low risk",
    advice: "A small number of reports exist for this number.",
    actions: &[
        "Let unknown calls from it go to voicemail",
        "Don't act on urgent payment requests from this number",
    ],
    tone: Tone::Caution,
};

static MOBILE_SUSPICIOUS: RiskUi = RiskUi {
    label: "Suspicious",
    advice: "This number shows patterns consistent with known scams.",
    actions: &[
        "Do not call back or reply to texts",
        "Block the number",
        "Report it so others are warned",
    ],
    tone: Tone::Warning,
};

static MOBILE_DANGEROUS: RiskUi = RiskUi {
    label: "Dangerous",
    advice: "This number is a confirmed scam caller.",
    actions: &[
        "Block the number now",
        "If you shared bank details, contact your bank immediately",
        "Warn family members who may have been called",
    ],
    tone: Tone::Danger,
};

static MOBILE_UNKNOWN: RiskUi = RiskUi {
    label: "Unknown",
    advice: "We couldn't rate this number. Treat it with care.",
    actions: &["Verify the caller through an official channel before engaging"],
    tone: Tone::Neutral,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundle_has_label_and_actions() {
        for kind in [CheckKind::Url, CheckKind::Email, CheckKind::Mobile] {
            for ordinal in -1..=4 {
                let ui = risk_ui(kind, RiskLevel::from_ordinal(ordinal));
                assert!(!ui.label.is_empty());
                assert!(!ui.advice.is_empty());
                assert!(!ui.actions.is_empty());
            }
        }
    }
}
