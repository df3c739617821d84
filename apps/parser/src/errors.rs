use thiserror::Error;

/// Errors raised at the JSON boundary of the parser.
///
/// The parsing pipeline itself never fails; low-confidence fields come back
/// empty instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ParseError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidInput(_) => "INVALID_INPUT",
            ParseError::Serialize(_) => "SERIALIZATION_ERROR",
        }
    }
}
