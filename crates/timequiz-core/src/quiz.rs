//! The timed quiz loop.
//!
//! Every problem races one background answer read against a single deadline
//! shared by the whole session, so slow early answers eat into the time left
//! for later problems.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::QuizError;
use crate::input::{spawn_answer_read, AnswerSource};
use crate::model::{Problem, QuizOutcome, Score};

/// Deadline used when the configured limit does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Progress through one problem set.
///
/// The cursor only moves forward and each problem is scored at most once,
/// so `correct <= answered <= total` always holds.
#[derive(Debug)]
pub struct QuizSession<'a> {
    problems: &'a [Problem],
    cursor: usize,
    correct: usize,
    deadline: Instant,
}

impl<'a> QuizSession<'a> {
    /// Start the clock: the deadline is fixed here and never moves.
    ///
    /// Limits too large to represent are capped at roughly thirty years.
    pub fn start(problems: &'a [Problem], time_limit: Duration) -> Self {
        let now = Instant::now();
        let deadline = now
            .checked_add(time_limit)
            .unwrap_or_else(|| now + FAR_FUTURE);
        Self {
            problems,
            cursor: 0,
            correct: 0,
            deadline,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// The problem waiting for an answer, with its 1-based display number.
    pub fn current(&self) -> Option<(usize, &'a Problem)> {
        self.problems
            .get(self.cursor)
            .map(|problem| (self.cursor + 1, problem))
    }

    /// Score `answer` against the current problem and move on.
    ///
    /// Returns whether the answer was correct. Does nothing once the
    /// problems are exhausted.
    pub fn submit(&mut self, answer: &str) -> bool {
        let Some((_, problem)) = self.current() else {
            return false;
        };
        let correct = problem.is_correct(answer);
        if correct {
            self.correct += 1;
        }
        self.cursor += 1;
        debug_assert!(self.correct <= self.cursor && self.cursor <= self.problems.len());
        correct
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.correct,
            total: self.problems.len(),
        }
    }

    pub fn finish(self, timed_out: bool) -> QuizOutcome {
        QuizOutcome {
            score: self.score(),
            answered: self.cursor,
            timed_out,
        }
    }
}

/// Runs a problem set against a global time limit.
#[derive(Debug, Clone, Copy)]
pub struct QuizRunner {
    time_limit: Duration,
}

impl QuizRunner {
    pub fn new(time_limit: Duration) -> Self {
        Self { time_limit }
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Prompt each problem on `out` and score answers read from `source`
    /// until the problems run out or the deadline passes.
    ///
    /// When the deadline wins, the pending read is left running and its
    /// answer is thrown away.
    pub async fn run<S, W>(
        &self,
        problems: &[Problem],
        source: Arc<S>,
        out: &mut W,
    ) -> Result<QuizOutcome, QuizError>
    where
        S: AnswerSource + ?Sized,
        W: Write,
    {
        let mut session = QuizSession::start(problems, self.time_limit);
        tracing::debug!(
            problems = problems.len(),
            limit_secs = self.time_limit.as_secs_f64(),
            "quiz started"
        );

        while let Some((number, problem)) = session.current() {
            write!(out, "Problem #{number}: {} = ", problem.question())?;
            out.flush()?;

            let answer_rx = spawn_answer_read(Arc::clone(&source))?;

            tokio::select! {
                _ = tokio::time::sleep_until(session.deadline()) => {
                    writeln!(out)?;
                    out.flush()?;
                    tracing::info!(problem = number, "time limit reached");
                    return Ok(session.finish(true));
                }
                answer = answer_rx => {
                    // A reader that died without sending counts as an empty answer.
                    let answer = answer.unwrap_or_default();
                    let correct = session.submit(&answer);
                    tracing::debug!(problem = number, correct, "answer scored");
                }
            }
        }

        Ok(session.finish(false))
    }
}
