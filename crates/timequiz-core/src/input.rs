//! Answer sources and the background reader that feeds the quiz loop.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use tokio::sync::oneshot;

/// Something that can block until the user has typed one answer.
pub trait AnswerSource: Send + Sync + 'static {
    /// Block until a full line is available and return it with surrounding
    /// whitespace removed. End of input yields an empty answer.
    fn read_answer(&self) -> io::Result<String>;
}

/// Reads answers from the process's standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinAnswers;

impl AnswerSource for StdinAnswers {
    fn read_answer(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Canned answers for driving a quiz without a terminal.
///
/// Each read waits `delay` before handing out the next answer. Once the
/// script runs out every read returns an empty answer, like a closed stdin.
#[derive(Debug)]
pub struct ScriptedAnswers {
    answers: Mutex<VecDeque<String>>,
    delay: Duration,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            delay: Duration::ZERO,
        }
    }

    /// Make every read take `delay` before it returns.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Answers not yet handed out.
    pub fn remaining(&self) -> usize {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn read_answer(&self) -> io::Result<String> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let next = self
            .answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        Ok(next.map(|a| a.trim().to_string()).unwrap_or_default())
    }
}

/// Start one blocking read on a detached thread.
///
/// The answer is posted into the returned one-shot receiver. If the receiver
/// is dropped first (the deadline won), the send fails and the thread just
/// ends. The thread is never joined; at most one is left behind per run and
/// it dies with the process.
pub fn spawn_answer_read<S>(source: Arc<S>) -> io::Result<oneshot::Receiver<String>>
where
    S: AnswerSource + ?Sized,
{
    let (tx, rx) = oneshot::channel();
    thread::Builder::new()
        .name("answer-reader".into())
        .spawn(move || {
            let answer = source.read_answer().unwrap_or_else(|e| {
                tracing::warn!("failed to read answer: {e}");
                String::new()
            });
            if tx.send(answer).is_err() {
                tracing::debug!("answer arrived after the deadline, discarded");
            }
        })?;
    Ok(rx)
}
