use std::path::Path;

use clap::Parser;
use phishscope::{
    cli::{commands::run, flags::Cli},
    core::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, Path::new(&cli.log_file))?;

    run(cli).await
}
