use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed portfolio data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed defaults file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid credentials")]
    InvalidCredentials,
}

pub type Result<T> = std::result::Result<T, FolioError>;
