//! CSV problem set loader.
//!
//! Reads `question,answer` rows and turns them into an ordered list of
//! [`Problem`]s. There is no header row; every record is a problem.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::QuizError;
use crate::model::Problem;

/// Map raw rows onto problems, preserving order.
///
/// Field 0 is the question, field 1 the answer. Any further fields are
/// ignored. A row with fewer than two fields fails the whole load.
pub fn problems_from_rows<I, R, S>(rows: I) -> Result<Vec<Problem>, QuizError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match row.as_ref() {
            [question, answer, ..] => {
                let question: &str = question.as_ref();
                Ok(Problem::new(question, answer.as_ref()))
            }
            short => Err(QuizError::MalformedRow {
                row: i + 1,
                fields: short.len(),
            }),
        })
        .collect()
}

/// Decode every CSV record from `reader` into a list of owned fields.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Vec<String>>, QuizError> {
    // Short rows must reach `problems_from_rows` so they get a row-level error
    // instead of csv's record-length mismatch.
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(rows)
}

/// Read and convert a whole problem set from any byte source.
pub fn load_problems<R: Read>(reader: R) -> Result<Vec<Problem>, QuizError> {
    let rows = read_rows(reader)?;
    let problems = problems_from_rows(&rows)?;
    tracing::debug!(count = problems.len(), "loaded problem set");
    Ok(problems)
}

/// Open `path` and load the problem set it contains.
pub fn load_problem_file(path: &Path) -> Result<Vec<Problem>, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "reading problem file");
    load_problems(file)
}
