use thiserror::Error;

pub type StyleResult<T> = Result<T, StyleError>;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid property path `{path}`: {reason}")]
    InvalidPropertyPath { path: String, reason: String },

    #[error("trace #{index} has no property `{path}`")]
    MissingProperty { index: usize, path: String },

    #[error("template `{0}` is not registered")]
    UnknownTemplate(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
