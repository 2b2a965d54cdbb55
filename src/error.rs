//! Error types raised while loading interval tables.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("No header found: a line beginning with '#' is expected before data")]
    MissingHeader,

    #[error("Required column '{0}' not found in header")]
    UnknownColumn(String),

    #[error("Malformed interval at line {line}: {reason}")]
    MalformedInterval { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ParseError::MalformedInterval {
            line,
            reason: reason.into(),
        }
    }
}
