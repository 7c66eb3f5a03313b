use chrono::{DateTime, Utc};

use crate::checks::host::hostname;
use crate::checks::CheckKind;
use crate::core::time::{days_before, elapsed_days};
use crate::core::types::{FeatureResult, RiskTier};
use crate::dns::{DnsCheckResult, DnsLookup};

/// Pseudo-registration window: five years of days.
pub const AGE_WINDOW_DAYS: u64 = 365 * 5;
pub const YOUNG_DOMAIN_DAYS: i64 = 30;
pub const NEW_DOMAIN_DAYS: i64 = 180;

/// Sum of the character codes of `host`.
pub fn host_hash(host: &str) -> u64 {
    host.chars().map(|c| c as u64).sum()
}

/// Deterministic stand-in for a WHOIS creation date.
pub fn pseudo_registration(host: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let offset = (host_hash(host) % AGE_WINDOW_DAYS) as i64;
    days_before(now, offset)
}

pub fn domain_age_days(host: &str, now: DateTime<Utc>) -> i64 {
    elapsed_days(pseudo_registration(host, now), now)
}

pub fn age_tier(age_days: i64) -> RiskTier {
    if age_days < YOUNG_DOMAIN_DAYS {
        RiskTier::High
    } else if age_days < NEW_DOMAIN_DAYS {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

pub async fn domain_information(
    url: &str,
    dns: &dyn DnsLookup,
    now: DateTime<Utc>,
) -> FeatureResult {
    let Some(host) = hostname(url) else {
        return CheckKind::DomainInformation.result(
            RiskTier::High,
            true,
            "Unable to verify domain information for invalid URL",
        );
    };

    let age = domain_age_days(&host, now);
    let dns_result = match dns.lookup(&host).await {
        Ok(res) => res,
        Err(err) => {
            tracing::warn!("dns lookup failed for {}: {}", host, err);
            DnsCheckResult::unavailable()
        }
    };

    let triggered = age < NEW_DOMAIN_DAYS || !dns_result.has_valid_records;
    CheckKind::DomainInformation.result(age_tier(age), triggered, render_details(age, &dns_result))
}

fn render_details(age: i64, dns: &DnsCheckResult) -> String {
    let mut out = format!("Domain age: {} days", age);
    if !dns.has_valid_records || dns.records.is_empty() {
        out.push_str("\nDNS records: no valid records found");
        return out;
    }
    out.push_str("\nDNS records:");
    for rec in &dns.records {
        out.push_str(&format!("\n  {}: {}", rec.record_type, rec.value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::{FailingDns, StubDns};

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-02T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn age_is_hash_modulo_window() {
        // g+o+o+g+l+e+.+c+o+m = 1002
        assert_eq!(host_hash("google.com"), 1002);
        assert_eq!(domain_age_days("google.com", fixed_now()), 1002);
        // 3466 wraps once around the five-year window
        assert_eq!(
            domain_age_days("secure-login-paypal.com-verify.info", fixed_now()),
            1641
        );
    }

    #[test]
    fn tiers_by_age() {
        assert_eq!(age_tier(0), RiskTier::High);
        assert_eq!(age_tier(29), RiskTier::High);
        assert_eq!(age_tier(30), RiskTier::Medium);
        assert_eq!(age_tier(179), RiskTier::Medium);
        assert_eq!(age_tier(180), RiskTier::Low);
    }

    #[tokio::test]
    async fn old_domain_with_records_is_low_and_quiet() {
        let res = domain_information("https://google.com", &StubDns::default(), fixed_now()).await;
        assert_eq!(res.risk_tier, RiskTier::Low);
        assert!(!res.triggered);
        let details = res.details.unwrap();
        assert!(details.starts_with("Domain age: 1002 days"));
        assert!(details.contains("A: 192.168.1.1"));
        assert!(details.contains("MX: mail.example.com"));
    }

    #[tokio::test]
    async fn young_domain_triggers_high() {
        // hash of cryptonewsite.top is an exact multiple of the window
        let res =
            domain_information("http://cryptonewsite.top", &StubDns::default(), fixed_now()).await;
        assert_eq!(res.risk_tier, RiskTier::High);
        assert!(res.triggered);
    }

    #[tokio::test]
    async fn single_letter_host_is_medium() {
        let res = domain_information("http://a/", &StubDns::default(), fixed_now()).await;
        assert_eq!(res.risk_tier, RiskTier::Medium);
        assert!(res.triggered);
    }

    #[tokio::test]
    async fn dns_failure_triggers_even_for_old_domain() {
        let res = domain_information("https://google.com", &FailingDns, fixed_now()).await;
        assert_eq!(res.risk_tier, RiskTier::Low);
        assert!(res.triggered);
        assert!(res.details.unwrap().contains("no valid records"));
    }

    #[tokio::test]
    async fn unparseable_host_raises_risk() {
        let res = domain_information("http://bad host", &StubDns::default(), fixed_now()).await;
        assert_eq!(res.risk_tier, RiskTier::High);
        assert!(res.triggered);
        assert_eq!(
            res.details.as_deref(),
            Some("Unable to verify domain information for invalid URL")
        );
    }
}
