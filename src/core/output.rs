use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::ScopeError;
use crate::core::time::now_utc;
use crate::core::types::{AnalysisResult, FeatureResult, RiskLevel, RiskTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Jsonl,
    Markdown,
}

pub fn render(results: &[AnalysisResult], format: OutputFormat) -> Result<String, ScopeError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Jsonl => render_jsonl(results),
        OutputFormat::Markdown => Ok(render_markdown(results)),
    }
}

pub fn write_results(
    results: &[AnalysisResult],
    format: OutputFormat,
    path: &Path,
) -> Result<(), ScopeError> {
    let body = render(results, format)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, body)?;
    Ok(())
}

fn render_jsonl(results: &[AnalysisResult]) -> Result<String, ScopeError> {
    let mut lines = String::new();
    for res in results {
        lines.push_str(&serde_json::to_string(res)?);
        lines.push('\n');
    }
    Ok(lines)
}

fn render_markdown(results: &[AnalysisResult]) -> String {
    let mut out = String::new();
    out.push_str("# Phishing Analysis Report\n\n");
    out.push_str(&format!("Generated: {}\n\n", now_utc().to_rfc3339()));
    if results.is_empty() {
        out.push_str("_No URLs analyzed._\n");
    }
    for res in results {
        out.push_str(&format!("## {}\n\n", res.normalized_url()));
        out.push_str(&format!(
            "- Score: {}/100\n- Risk level: {}\n\n",
            res.score(),
            level_label(res.risk_level())
        ));

        if res.risk_level() != RiskLevel::Safe {
            out.push_str("### Detected Issues\n\n");
            for tier in [RiskTier::High, RiskTier::Medium, RiskTier::Low] {
                for feature in res.triggered_at(tier) {
                    push_feature(&mut out, feature);
                }
            }
            out.push('\n');
        }

        out.push_str("### All Checks\n\n");
        for feature in res.features() {
            push_feature(&mut out, feature);
        }
        out.push('\n');
    }
    out
}

fn push_feature(out: &mut String, feature: &FeatureResult) {
    let status = if feature.triggered { "flagged" } else { "passed" };
    out.push_str(&format!(
        "- **{}** [{} / {}]: {}\n",
        feature.name, feature.risk_tier, status, feature.description
    ));
    if let Some(details) = &feature.details {
        for line in details.lines() {
            out.push_str(&format!("  > {}\n", line));
        }
    }
}

fn level_label(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Safe => "Safe",
        RiskLevel::Suspicious => "Suspicious",
        RiskLevel::Dangerous => "Dangerous",
    }
}
