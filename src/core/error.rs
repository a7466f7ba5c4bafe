use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("LLM error: {0}")]
    LlmError(String),

    /// Elapsed limit in milliseconds
    #[error("LLM request timed out after {0} ms")]
    LlmTimeout(u64),

    #[error("LLM unavailable: {0}")]
    LlmUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
