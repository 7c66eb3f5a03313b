//! Heuristic phishing risk scoring for URLs.
//!
//! A URL is normalized, run through a fixed battery of seven checks and
//! scored by subtracting per-tier penalties from 100.

pub mod checks;
pub mod cli;
pub mod config;
pub mod core;
pub mod dns;
pub mod pipeline;

pub use crate::core::engine::{analyze, Engine};
pub use crate::core::types::{AnalysisResult, FeatureResult, RiskLevel, RiskTier};
