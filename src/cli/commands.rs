use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::flags::Cli;
use crate::config::load_config;
use crate::core::engine::Engine;
use crate::core::error::ScopeError;
use crate::core::output::{render, write_results, OutputFormat};
use crate::dns::FailingDns;

pub async fn run(cli: Cli) -> Result<()> {
    let cfg = load_config(cli.config.as_deref())?;
    let format = cli
        .format
        .clone()
        .map(OutputFormat::from)
        .or(cfg.default_format)
        .unwrap_or(OutputFormat::Markdown);

    let urls = collect_urls(&cli.urls, cli.input.as_deref())?;
    if urls.is_empty() {
        return Err(ScopeError::Input(
            "no URLs given; pass them as arguments or via --input".into(),
        )
        .into());
    }

    let mut engine = Engine::new(&cfg);
    if cli.dns_fail {
        tracing::warn!("DNS collaborator disabled; domain checks will report missing records");
        engine = engine.dns(Arc::new(FailingDns));
    }
    let engine = Arc::new(engine);

    tracing::info!("analyzing {} url(s)", urls.len());
    let results = engine.analyze_batch(urls).await?;

    match &cli.output {
        Some(path) => {
            write_results(&results, format, path)?;
            tracing::info!("report written to {}", path.display());
        }
        None => println!("{}", render(&results, format)?),
    }
    Ok(())
}

pub fn collect_urls(args: &[String], input: Option<&Path>) -> Result<Vec<String>> {
    let mut urls: Vec<String> = args.to_vec();
    if let Some(path) = input {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading url list {}", path.display()))?;
        urls.extend(parse_url_list(&content));
    }
    Ok(urls)
}

pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
