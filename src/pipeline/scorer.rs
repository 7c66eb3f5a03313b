use crate::core::types::{FeatureResult, RiskLevel};

pub const MAX_SCORE: u8 = 100;

/// Linear penalty sum over triggered features, clamped to `0..=100`.
pub fn score_features(features: &[FeatureResult]) -> u8 {
    let penalty: u32 = features.iter().map(FeatureResult::penalty).sum();
    u32::from(MAX_SCORE).saturating_sub(penalty) as u8
}

pub fn classify(score: u8) -> RiskLevel {
    RiskLevel::from_score(score)
}
