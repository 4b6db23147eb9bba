use parser_framework::{ParseFailure, Position};
use thiserror::Error;

/// Why a document could not be turned into a [`JValue`](crate::JValue).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// The text does not match the grammar. Displays as a caret diagnostic.
    #[error("{0}")]
    Syntax(#[from] ParseFailure),
    /// Arrays and objects were nested past `limit`. `failure` points at the
    /// first container that went too deep.
    #[error("{failure}")]
    NestingTooDeep { limit: usize, failure: ParseFailure },
}

impl JsonError {
    /// The underlying parse failure.
    pub fn failure(&self) -> &ParseFailure {
        match self {
            JsonError::Syntax(failure) | JsonError::NestingTooDeep { failure, .. } => failure,
        }
    }

    /// Where parsing gave up.
    pub fn position(&self) -> Position {
        self.failure().at()
    }

    /// The grammar rule that reported the problem.
    pub fn label(&self) -> &str {
        &self.failure().label
    }
}
