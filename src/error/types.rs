use thiserror::Error;

/// Unified result type for the layout checker.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Failures surfaced by the layout checker, one variant per reporting tier.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The furniture list text could not be decoded.
    #[error("invalid JSON format in furniture_list: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        received: String,
    },
    /// Well-formed input that breaks one or more range or shape rules.
    #[error("invalid input ({} problem(s))", .0.len())]
    Invalid(Vec<String>),
    /// The tool argument document itself was malformed.
    #[error("invalid tool arguments: {0}")]
    Arguments(#[source] serde_json::Error),
    #[error("{0}")]
    Internal(String),
}

impl CheckError {
    /// Lowercase tag used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::Parse { .. } => "parse",
            CheckError::Invalid(_) => "invalid",
            CheckError::Arguments(_) => "arguments",
            CheckError::Internal(_) => "internal",
        }
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        CheckError::Internal(err.to_string())
    }
}
