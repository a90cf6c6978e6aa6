use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    /// Transport failure, or a response body that was not the expected JSON.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl BoardError {
    /// Stable label for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            BoardError::Http(e) if e.is_decode() => "decode",
            BoardError::Http(_) => "network",
            BoardError::Config(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
