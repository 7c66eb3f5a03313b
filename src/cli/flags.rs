use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "phishscope",
    version,
    about = "Heuristic phishing risk scoring for URLs"
)]
pub struct Cli {
    /// URLs to analyze
    pub urls: Vec<String>,

    /// File with one URL per line (blank lines and # comments ignored)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output format (defaults to config, then markdown)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Path to config file (TOML). Default: config/phishscope.toml
    #[arg(long)]
    pub config: Option<String>,

    /// Simulate an unreachable DNS collaborator
    #[arg(long)]
    pub dns_fail: bool,

    /// Increase verbosity (debug, trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log file path
    #[arg(long, default_value = "data/phishscope.log")]
    pub log_file: String,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Jsonl,
    #[value(alias = "md")]
    Markdown,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Jsonl => OutputFormat::Jsonl,
            OutputFormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_urls_and_flags() {
        let cli = Cli::try_parse_from([
            "phishscope",
            "example.com",
            "https://google.com",
            "--format",
            "jsonl",
            "-vv",
            "--dns-fail",
        ])
        .unwrap();
        assert_eq!(cli.urls, vec!["example.com", "https://google.com"]);
        assert!(matches!(cli.format, Some(OutputFormatArg::Jsonl)));
        assert_eq!(cli.verbose, 2);
        assert!(cli.dns_fail);
        assert_eq!(cli.log_file, "data/phishscope.log");
    }

    #[test]
    fn markdown_format_accepts_long_and_short_names() {
        for name in ["markdown", "md"] {
            let cli = Cli::try_parse_from(["phishscope", "x", "--format", name]).unwrap();
            let format: OutputFormat = cli.format.unwrap().into();
            assert_eq!(format, OutputFormat::Markdown);
        }
    }
}
