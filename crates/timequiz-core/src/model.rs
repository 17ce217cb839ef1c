//! Core data model types for timequiz.

use std::fmt;

/// A single quiz item: a question and its expected answer.
///
/// The answer is trimmed on construction; the question is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    question: String,
    answer: String,
}

impl Problem {
    pub fn new(question: impl Into<String>, answer: &str) -> Self {
        Self {
            question: question.into(),
            answer: answer.trim().to_string(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Exact comparison against the stored answer.
    pub fn is_correct(&self, given: &str) -> bool {
        given == self.answer
    }
}

/// Final tally of a quiz run.
///
/// `total` is the number of problems loaded, not the number attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} out of {}.", self.correct, self.total)
    }
}

/// Everything a finished session reports back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: Score,
    /// Problems whose answer arrived before the deadline.
    pub answered: usize,
    /// Whether the deadline cut the session short.
    pub timed_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_is_trimmed_question_is_not() {
        let p = Problem::new(" 3+3 ", "  6 \t");
        assert_eq!(p.question(), " 3+3 ");
        assert_eq!(p.answer(), "6");
    }

    #[test]
    fn correctness_is_exact() {
        let p = Problem::new("capital of France", "Paris");
        assert!(p.is_correct("Paris"));
        assert!(!p.is_correct("paris"));
        assert!(!p.is_correct(""));
    }

    #[test]
    fn score_display() {
        let score = Score {
            correct: 1,
            total: 2,
        };
        assert_eq!(score.to_string(), "You scored 1 out of 2.");
    }
}
