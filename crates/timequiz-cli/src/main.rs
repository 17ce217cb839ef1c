//! timequiz CLI — a timed quiz over a CSV of `question,answer` pairs.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod quiz;

#[derive(Parser)]
#[command(
    name = "timequiz",
    version,
    about = "Timed terminal quiz over a CSV of question,answer pairs"
)]
struct Cli {
    /// A csv file in the format of 'question,answer' [default: problems.csv]
    #[arg(long)]
    csv: Option<PathBuf>,

    /// The time limit for the quiz in seconds [default: 10]
    #[arg(long)]
    limit: Option<u64>,

    /// Config file path (default: ./timequiz.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never interleave with the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = quiz::execute(cli.csv, cli.limit, cli.config).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
