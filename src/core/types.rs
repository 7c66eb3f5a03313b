use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity bucket attached to a single check's finding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    None,
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Points removed from the score when a check with this tier triggers.
    pub fn penalty(self) -> u32 {
        match self {
            RiskTier::High => 25,
            RiskTier::Medium => 15,
            RiskTier::Low => 5,
            RiskTier::None => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::High => "high",
            RiskTier::Medium => "medium",
            RiskTier::Low => "low",
            RiskTier::None => "none",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of the final score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Suspicious,
    Dangerous,
}

impl RiskLevel {
    pub const SAFE_FLOOR: u8 = 80;
    pub const SUSPICIOUS_FLOOR: u8 = 40;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::SAFE_FLOOR {
            RiskLevel::Safe
        } else if score >= Self::SUSPICIOUS_FLOOR {
            RiskLevel::Suspicious
        } else {
            RiskLevel::Dangerous
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Suspicious => "suspicious",
            RiskLevel::Dangerous => "dangerous",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one feature check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureResult {
    pub name: String,
    pub description: String,
    pub risk_tier: RiskTier,
    pub triggered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FeatureResult {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        risk_tier: RiskTier,
        triggered: bool,
        details: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            risk_tier,
            triggered,
            details: Some(details.into()),
        }
    }

    /// Penalty this result contributes to the aggregate score.
    pub fn penalty(&self) -> u32 {
        if self.triggered {
            self.risk_tier.penalty()
        } else {
            0
        }
    }
}

/// Full result of a single `analyze` call.
///
/// Fields are only reachable through accessors so a result cannot drift
/// away from the score its features imply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    normalized_url: String,
    score: u8,
    risk_level: RiskLevel,
    features: Vec<FeatureResult>,
}

impl AnalysisResult {
    pub(crate) fn new(
        normalized_url: String,
        score: u8,
        risk_level: RiskLevel,
        features: Vec<FeatureResult>,
    ) -> Self {
        Self {
            normalized_url,
            score,
            risk_level,
            features,
        }
    }

    pub fn normalized_url(&self) -> &str {
        &self.normalized_url
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn features(&self) -> &[FeatureResult] {
        &self.features
    }

    pub fn feature(&self, name: &str) -> Option<&FeatureResult> {
        self.features.iter().find(|f| f.name == name)
    }

    /// Triggered features at the given tier, in execution order.
    pub fn triggered_at(&self, tier: RiskTier) -> impl Iterator<Item = &FeatureResult> {
        self.features
            .iter()
            .filter(move |f| f.triggered && f.risk_tier == tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds_are_inclusive_at_floor() {
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_score(80), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_score(79), RiskLevel::Suspicious);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Suspicious);
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Dangerous);
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Dangerous);
    }

    #[test]
    fn untriggered_result_costs_nothing() {
        let quiet = FeatureResult::new("x", "x", RiskTier::High, false, "");
        let loud = FeatureResult::new("x", "x", RiskTier::High, true, "");
        assert_eq!(quiet.penalty(), 0);
        assert_eq!(loud.penalty(), 25);
    }

    #[test]
    fn wire_names_are_lowercase_camel() {
        let feature = FeatureResult::new("URL Length", "d", RiskTier::Low, true, "ok");
        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["riskTier"], "low");
        assert_eq!(json["triggered"], true);
        let level = serde_json::to_value(RiskLevel::Suspicious).unwrap();
        assert_eq!(level, "suspicious");
    }
}
