//! DNS collaborator used by the domain information check.
//!
//! Nothing here touches the network. `StubDns` answers every hostname with
//! the same record set; a resolver-backed implementation only needs to
//! implement [`DnsLookup`].

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::error::ScopeError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Cname,
    Txt,
    Mx,
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DnsRecordType::A => "A",
            DnsRecordType::Cname => "CNAME",
            DnsRecordType::Txt => "TXT",
            DnsRecordType::Mx => "MX",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub value: String,
}

impl DnsRecord {
    pub fn new(record_type: DnsRecordType, value: impl Into<String>) -> Self {
        Self {
            record_type,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DnsCheckResult {
    pub records: Vec<DnsRecord>,
    pub has_valid_records: bool,
}

impl DnsCheckResult {
    /// What a failed lookup degrades to.
    pub fn unavailable() -> Self {
        Self {
            records: Vec::new(),
            has_valid_records: false,
        }
    }
}

#[async_trait]
pub trait DnsLookup: Send + Sync {
    async fn lookup(&self, hostname: &str) -> Result<DnsCheckResult, ScopeError>;
}

/// Simulated resolver returning a fixed record set for any hostname.
#[derive(Debug, Clone)]
pub struct StubDns {
    records: Vec<DnsRecord>,
}

impl StubDns {
    pub fn with_records(records: Vec<DnsRecord>) -> Self {
        Self { records }
    }
}

impl Default for StubDns {
    fn default() -> Self {
        Self::with_records(default_records())
    }
}

#[async_trait]
impl DnsLookup for StubDns {
    async fn lookup(&self, hostname: &str) -> Result<DnsCheckResult, ScopeError> {
        tracing::trace!("stub dns lookup for {}", hostname);
        Ok(DnsCheckResult {
            records: self.records.clone(),
            has_valid_records: true,
        })
    }
}

/// Resolver that always errors; drives the degraded path of the domain check.
#[derive(Debug, Clone, Default)]
pub struct FailingDns;

#[async_trait]
impl DnsLookup for FailingDns {
    async fn lookup(&self, hostname: &str) -> Result<DnsCheckResult, ScopeError> {
        Err(ScopeError::Dns(format!("lookup disabled for {}", hostname)))
    }
}

pub fn default_records() -> Vec<DnsRecord> {
    vec![
        DnsRecord::new(DnsRecordType::A, "192.168.1.1"),
        DnsRecord::new(DnsRecordType::Cname, "example.com"),
        DnsRecord::new(DnsRecordType::Txt, "v=spf1 include:_spf.example.com ~all"),
        DnsRecord::new(DnsRecordType::Mx, "mail.example.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_reports_four_valid_records() {
        let res = StubDns::default().lookup("anything.test").await.unwrap();
        assert!(res.has_valid_records);
        let types: Vec<DnsRecordType> = res.records.iter().map(|r| r.record_type).collect();
        assert_eq!(
            types,
            vec![
                DnsRecordType::A,
                DnsRecordType::Cname,
                DnsRecordType::Txt,
                DnsRecordType::Mx
            ]
        );
    }

    #[tokio::test]
    async fn failing_resolver_errors() {
        let err = FailingDns.lookup("example.com").await.unwrap_err();
        assert!(matches!(err, ScopeError::Dns(_)));
    }

    #[test]
    fn record_type_uses_dns_spelling_on_the_wire() {
        let rec = DnsRecord::new(DnsRecordType::Cname, "example.com");
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "CNAME");
    }
}
