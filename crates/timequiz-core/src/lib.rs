//! timequiz-core — Problem loading and the timed quiz loop.
//!
//! This crate holds the data model, the CSV loader and the session logic
//! that races each answer against a single global deadline.

pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod model;
pub mod quiz;

pub use config::{load_config, load_config_from, QuizConfig};
pub use error::QuizError;
pub use input::{AnswerSource, ScriptedAnswers, StdinAnswers};
pub use loader::{load_problem_file, load_problems, problems_from_rows};
pub use model::{Problem, QuizOutcome, Score};
pub use quiz::{QuizRunner, QuizSession};
