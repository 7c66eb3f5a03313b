use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::{
    checks::{CheckCtx, CHECK_ORDER},
    config::AppConfig,
    core::{error::ScopeError, time::now_utc, types::AnalysisResult},
    dns::{DnsLookup, StubDns},
    pipeline::{
        normalizer::normalize_url,
        scorer::{classify, score_features},
    },
};

/// Risk evaluator. Holds no per-call state, so one instance can serve
/// any number of concurrent `analyze` calls.
pub struct Engine {
    dns: Arc<dyn DnsLookup>,
    max_concurrent: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_dns(Arc::new(StubDns::default()))
    }
}

impl Engine {
    pub fn new(config: &AppConfig) -> Self {
        let dns = StubDns::with_records(config.dns.records.clone());
        Self {
            dns: Arc::new(dns),
            max_concurrent: config.max_concurrent_analyses.max(1),
        }
    }

    pub fn with_dns(dns: Arc<dyn DnsLookup>) -> Self {
        Self {
            dns,
            max_concurrent: AppConfig::default().max_concurrent_analyses,
        }
    }

    pub fn dns(mut self, dns: Arc<dyn DnsLookup>) -> Self {
        self.dns = dns;
        self
    }

    /// Score a single URL. Never fails; malformed input is reported
    /// through the individual feature results.
    pub async fn analyze(&self, url: &str) -> AnalysisResult {
        let normalized = normalize_url(url);
        let ctx = CheckCtx {
            dns: self.dns.as_ref(),
            now: now_utc(),
        };

        let mut features = Vec::with_capacity(CHECK_ORDER.len());
        for check in CHECK_ORDER {
            let feature = check.run(&normalized, &ctx).await;
            tracing::debug!(
                "{}: triggered={} tier={}",
                feature.name,
                feature.triggered,
                feature.risk_tier
            );
            features.push(feature);
        }

        let score = score_features(&features);
        let level = classify(score);
        tracing::info!("{} scored {} ({})", normalized, score, level);
        AnalysisResult::new(normalized, score, level, features)
    }

    /// Score many URLs concurrently. Results come back in input order.
    pub async fn analyze_batch(
        self: &Arc<Self>,
        urls: Vec<String>,
    ) -> Result<Vec<AnalysisResult>, ScopeError> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = JoinSet::new();

        for (idx, url) in urls.into_iter().enumerate() {
            let engine = Arc::clone(self);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.map_err(|_| ScopeError::Unknown)?;
                Ok::<_, ScopeError>((idx, engine.analyze(&url).await))
            });
        }

        let mut slots: Vec<Option<AnalysisResult>> = Vec::new();
        slots.resize_with(tasks.len(), || None);
        while let Some(joined) = tasks.join_next().await {
            let (idx, result) = joined.map_err(|e| {
                tracing::warn!("analysis task failed: {}", e);
                ScopeError::Unknown
            })??;
            slots[idx] = Some(result);
        }

        slots
            .into_iter()
            .map(|slot| slot.ok_or(ScopeError::Unknown))
            .collect()
    }
}

/// Score a URL with the default stub DNS collaborator.
pub async fn analyze(url: &str) -> AnalysisResult {
    Engine::default().analyze(url).await
}
