//! Country code lookup binary.

use clap::Parser;
use iso3166_cli::{load_index, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so query output stays clean on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let (index, stats) = load_index(&cli)?;
    tracing::info!("Loaded {} country codes", index.len());

    let output = run(&cli, &index, &stats)?;
    println!("{}", output);

    Ok(())
}
