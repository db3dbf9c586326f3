use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Expected {expected} scores, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },

    #[error("Score for Subject {subject} is not a finite number: {value}", subject = .index + 1)]
    NonFiniteScore { index: usize, value: f64 },

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Student already exists: {0}")]
    DuplicateStudent(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error was caused by caller input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInputLength { .. }
                | Self::NonFiniteScore { .. }
                | Self::DuplicateStudent(_)
                | Self::InvalidField(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
