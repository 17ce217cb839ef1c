//! Runs one quiz session on the terminal.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use timequiz_core::config::load_config_from;
use timequiz_core::{load_problem_file, QuizRunner, StdinAnswers};

pub async fn execute(
    csv: Option<PathBuf>,
    limit: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    // Flags win over the environment and the config file.
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(csv) = csv {
        config.csv = csv;
    }
    if let Some(limit) = limit {
        config.limit_secs = limit;
    }
    anyhow::ensure!(
        config.limit_secs >= 1,
        "time limit must be at least 1 second"
    );

    let problems = match load_problem_file(&config.csv) {
        Ok(problems) => problems,
        Err(e) if e.is_parse_error() => {
            let context = format!("invalid problem file: {}", config.csv.display());
            return Err(anyhow::Error::new(e).context(context));
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(
        csv = %config.csv.display(),
        problems = problems.len(),
        limit_secs = config.limit_secs,
        "starting quiz"
    );

    let runner = QuizRunner::new(config.time_limit());
    let mut stdout = io::stdout();
    let outcome = runner
        .run(&problems, Arc::new(StdinAnswers), &mut stdout)
        .await?;

    if outcome.timed_out {
        tracing::info!(answered = outcome.answered, "quiz ended by time limit");
    }
    println!("{}", outcome.score);

    Ok(())
}
