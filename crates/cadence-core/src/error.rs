#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Cannot score an empty set of lines")]
    EmptyInput,

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Input too large: {lines} lines (max {max})")]
    InputTooLarge { lines: usize, max: usize },

    #[error("Language pack error: {0}")]
    Pack(#[from] PackError),
}

/// Errors raised while loading a language pack asset
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid pack: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
