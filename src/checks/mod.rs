use chrono::{DateTime, Utc};

use crate::core::types::{FeatureResult, RiskTier};
use crate::dns::DnsLookup;

pub mod domain_info;
pub mod host;
pub mod lexical;

/// One heuristic rule. Variants are listed in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    SuspiciousWords,
    ExcessiveSubdomains,
    UrlLength,
    IpAddress,
    SpecialCharacters,
    DomainInformation,
    HttpsProtocol,
}

/// Order in which checks run and appear in `AnalysisResult::features`.
pub const CHECK_ORDER: [CheckKind; 7] = [
    CheckKind::SuspiciousWords,
    CheckKind::ExcessiveSubdomains,
    CheckKind::UrlLength,
    CheckKind::IpAddress,
    CheckKind::SpecialCharacters,
    CheckKind::DomainInformation,
    CheckKind::HttpsProtocol,
];

/// Inputs shared by every check within a single analysis.
pub struct CheckCtx<'a> {
    pub dns: &'a dyn DnsLookup,
    pub now: DateTime<Utc>,
}

impl CheckKind {
    pub fn name(self) -> &'static str {
        match self {
            CheckKind::SuspiciousWords => "Suspicious Words",
            CheckKind::ExcessiveSubdomains => "Excessive Subdomains",
            CheckKind::UrlLength => "URL Length",
            CheckKind::IpAddress => "IP Address URL",
            CheckKind::SpecialCharacters => "Special Characters",
            CheckKind::DomainInformation => "Domain Information",
            CheckKind::HttpsProtocol => "HTTPS Protocol",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CheckKind::SuspiciousWords => "Checks for words commonly used in phishing URLs",
            CheckKind::ExcessiveSubdomains => {
                "Multiple subdomains can be used to obscure the real domain"
            }
            CheckKind::UrlLength => "Excessively long URLs can hide the true destination",
            CheckKind::IpAddress => "URLs using IP addresses instead of domains are suspicious",
            CheckKind::SpecialCharacters => {
                "Excessive special characters can be used to obfuscate malicious URLs"
            }
            CheckKind::DomainInformation => {
                "Recently registered domains or missing DNS records are common in phishing"
            }
            CheckKind::HttpsProtocol => "Phishing sites may not use secure HTTPS connections",
        }
    }

    pub(crate) fn result(
        self,
        tier: RiskTier,
        triggered: bool,
        details: impl Into<String>,
    ) -> FeatureResult {
        FeatureResult::new(self.name(), self.description(), tier, triggered, details)
    }

    pub async fn run(self, url: &str, ctx: &CheckCtx<'_>) -> FeatureResult {
        match self {
            CheckKind::SuspiciousWords => lexical::suspicious_words(url),
            CheckKind::ExcessiveSubdomains => host::excessive_subdomains(url),
            CheckKind::UrlLength => lexical::url_length(url),
            CheckKind::IpAddress => host::ip_address(url),
            CheckKind::SpecialCharacters => lexical::special_characters(url),
            CheckKind::DomainInformation => {
                domain_info::domain_information(url, ctx.dns, ctx.now).await
            }
            CheckKind::HttpsProtocol => lexical::https_protocol(url),
        }
    }
}
