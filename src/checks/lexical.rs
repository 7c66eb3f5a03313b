//! Checks that only look at the raw characters of the normalized URL.

use crate::checks::CheckKind;
use crate::core::types::{FeatureResult, RiskTier};

pub const SUSPICIOUS_WORDS: [&str; 11] = [
    "secure", "login", "account", "verify", "bank", "paypal", "confirm", "update", "wallet",
    "support", "password",
];

pub const SPECIAL_CHARS: [char; 7] = ['@', '-', '_', '%', '=', '+', '~'];

pub const LENGTH_LOW_ABOVE: usize = 75;
pub const LENGTH_MEDIUM_ABOVE: usize = 100;

pub fn suspicious_words(url: &str) -> FeatureResult {
    let lowered = url.to_lowercase();
    let found: Vec<&str> = SUSPICIOUS_WORDS
        .iter()
        .copied()
        .filter(|word| lowered.contains(word))
        .collect();

    let tier = match found.len() {
        0 => RiskTier::None,
        1 | 2 => RiskTier::Low,
        _ => RiskTier::Medium,
    };
    let details = if found.is_empty() {
        "No suspicious words detected".to_string()
    } else {
        format!("Found: {}", found.join(", "))
    };
    CheckKind::SuspiciousWords.result(tier, !found.is_empty(), details)
}

/// Length in UTF-16 code units, the unit browsers report for URLs.
pub fn url_length(url: &str) -> FeatureResult {
    let len = url.encode_utf16().count();
    let tier = if len > LENGTH_MEDIUM_ABOVE {
        RiskTier::Medium
    } else if len > LENGTH_LOW_ABOVE {
        RiskTier::Low
    } else {
        RiskTier::None
    };
    CheckKind::UrlLength.result(
        tier,
        len > LENGTH_LOW_ABOVE,
        format!("URL length is {} characters", len),
    )
}

pub fn special_characters(url: &str) -> FeatureResult {
    let total = url.chars().filter(|c| SPECIAL_CHARS.contains(c)).count();
    let tier = match total {
        0..=2 => RiskTier::None,
        3..=5 => RiskTier::Low,
        _ => RiskTier::Medium,
    };
    CheckKind::SpecialCharacters.result(
        tier,
        total > 2,
        format!("Found {} special characters", total),
    )
}

pub fn https_protocol(url: &str) -> FeatureResult {
    let has_https = url.starts_with("https://");
    let (tier, details) = if has_https {
        (RiskTier::None, "URL uses HTTPS (secure)")
    } else {
        (RiskTier::Medium, "URL does not use HTTPS (insecure)")
    };
    CheckKind::HttpsProtocol.result(tier, !has_https, details)
}
