//! The list of teams already picked (or held back), one team code per line.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use survivor::domain::Team;

#[derive(Debug, Error)]
pub enum ChosenError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed team code '{code}' on line {line}")]
    MalformedCode { code: String, line: usize },
}

pub fn parse(text: &str) -> Result<Vec<Team>, ChosenError> {
    let mut teams = vec![];
    for (index, line) in text.lines().enumerate() {
        let code = line.trim();
        if code.is_empty() {
            continue;
        }
        if code.chars().any(char::is_whitespace) {
            return Err(ChosenError::MalformedCode {
                code: code.into(),
                line: index + 1,
            });
        }
        teams.push(Team::from(code));
    }
    Ok(teams)
}

/// Reads the chosen teams from `path`. A missing file is taken to mean that nothing has been
/// chosen yet.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<Team>, ChosenError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("no chosen teams file at {path:?}; starting with no preselected teams");
            Ok(vec![])
        }
        Err(err) => Err(err.into()),
    }
}
