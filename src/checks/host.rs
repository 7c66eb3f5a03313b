//! Checks driven by the parsed hostname.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::checks::CheckKind;
use crate::core::types::{FeatureResult, RiskTier};

static IPV4_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("ipv4 pattern compiles")
});

/// Hostname of `url` as a WHATWG parser would report it, or `None` if the
/// URL does not parse or has no host.
pub fn hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Some(host.to_string()),
        _ => None,
    }
}

/// Dot-separated labels minus the registrable pair. Bare hosts go negative.
pub fn subdomain_count(host: &str) -> i64 {
    host.split('.').count() as i64 - 2
}

pub fn excessive_subdomains(url: &str) -> FeatureResult {
    let Some(host) = hostname(url) else {
        return CheckKind::ExcessiveSubdomains.result(
            RiskTier::None,
            false,
            "Unable to analyze subdomains in invalid URL",
        );
    };
    let count = subdomain_count(&host);
    let tier = if count > 2 {
        RiskTier::Medium
    } else if count > 1 {
        RiskTier::Low
    } else {
        RiskTier::None
    };
    CheckKind::ExcessiveSubdomains.result(tier, count > 1, format!("Found {} subdomains", count))
}

pub fn ip_address(url: &str) -> FeatureResult {
    let Some(host) = hostname(url) else {
        return CheckKind::IpAddress.result(
            RiskTier::None,
            false,
            "Unable to analyze hostname in invalid URL",
        );
    };
    if IPV4_HOST.is_match(&host) {
        CheckKind::IpAddress.result(
            RiskTier::High,
            true,
            format!("URL uses IP address {}", host),
        )
    } else {
        CheckKind::IpAddress.result(RiskTier::None, false, "No IP address used")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_rejects_hostless_input() {
        assert_eq!(hostname("http://Example.COM/x").as_deref(), Some("example.com"));
        assert_eq!(hostname("http://exa mple.com"), None);
        assert_eq!(hostname("http://"), None);
    }

    #[test]
    fn subdomain_count_is_not_clamped() {
        assert_eq!(subdomain_count("localhost"), -1);
        assert_eq!(subdomain_count("example.com"), 0);
        assert_eq!(subdomain_count("a.b.c.example.com"), 3);
    }

    #[test]
    fn subdomain_tiers() {
        assert!(!excessive_subdomains("http://www.example.com").triggered);

        let low = excessive_subdomains("http://a.b.example.com");
        assert!(low.triggered);
        assert_eq!(low.risk_tier, RiskTier::Low);

        let medium = excessive_subdomains("http://a.b.c.example.com");
        assert_eq!(medium.risk_tier, RiskTier::Medium);
        assert_eq!(medium.details.as_deref(), Some("Found 3 subdomains"));
    }

    #[test]
    fn unparseable_host_is_quiet() {
        let res = excessive_subdomains("http://bad host");
        assert!(!res.triggered);
        assert_eq!(res.risk_tier, RiskTier::None);

        let res = ip_address("http://bad host");
        assert!(!res.triggered);
        assert_eq!(res.risk_tier, RiskTier::None);
    }

    #[test]
    fn dotted_quad_host_is_high_risk() {
        let res = ip_address("http://192.168.1.1/login");
        assert!(res.triggered);
        assert_eq!(res.risk_tier, RiskTier::High);
        assert!(!ip_address("http://example.com").triggered);
        assert!(!ip_address("http://[::1]/").triggered);
    }
}
