use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoError {
    #[error("Translation failed: {0}")]
    Translation(String),
    #[error("Invalid option {field}: {reason}")]
    InvalidOption { field: String, reason: String },
    #[error("Preset not found: {name}")]
    PresetNotFound { name: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PoError>;
