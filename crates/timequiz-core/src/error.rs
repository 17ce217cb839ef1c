//! Quiz error types.
//!
//! Every variant here is fatal and raised before the interactive loop starts,
//! except `Io`, which only surfaces if the console goes away mid-quiz.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a problem set or running a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The problem file could not be opened.
    #[error("failed to open the csv file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The problem file is not valid CSV.
    #[error("failed to parse the provided csv file")]
    Parse(#[from] csv::Error),

    /// A row has fewer than the two required fields.
    #[error("malformed row {row}: expected `question,answer` but found {fields} field(s)")]
    MalformedRow { row: usize, fields: usize },

    /// The configuration file or environment could not be used.
    #[error("invalid configuration ({origin}): {message}")]
    Config { origin: String, message: String },

    /// Writing a prompt or spawning the answer reader failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Returns `true` for errors caused by the contents of the problem file.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, QuizError::Parse(_) | QuizError::MalformedRow { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_the_file() {
        let err = QuizError::Open {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to open the csv file: missing.csv");
        assert!(!err.is_parse_error());
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let err = QuizError::MalformedRow { row: 3, fields: 1 };
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("row 3"));
        assert!(err.to_string().contains("1 field(s)"));
    }
}
