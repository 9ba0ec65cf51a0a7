use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordForgeError {
    #[error("Invalid word '{0}'. Uppercase ASCII letters only.")]
    InvalidWord(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type WfResult<T> = Result<T, WordForgeError>;
