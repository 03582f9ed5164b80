use anyhow::Result;
use clap::Parser;
use tasrif_cli::{cli::TasrifCli, run};
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<()> {
    let cli = TasrifCli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}
