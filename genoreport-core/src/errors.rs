use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenoreportError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Invalid reference data: {0}")]
    InvalidReferenceData(String),

    #[error("Invalid report config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for genoreport operations.
pub type Result<T> = std::result::Result<T, GenoreportError>;
