use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no configuration found (looked in {})", .0.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "))]
    Missing(Vec<PathBuf>),
    #[error("invalid configuration in {path}: {message}")]
    Invalid { path: PathBuf, message: String },
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("request to text service failed: {0}")]
    Transport(String),
    #[error("text service returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("text service returned an unusable response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Transport(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("key injection failed: {0}")]
    Keyboard(String),
}

impl From<arboard::Error> for PlatformError {
    fn from(err: arboard::Error) -> Self {
        PlatformError::Clipboard(err.to_string())
    }
}
