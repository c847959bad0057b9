use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("profile `{0}` not found")]
    ProfileNotFound(String),
    #[error("invalid profile {}: {reason}", .path.display())]
    InvalidProfile { path: PathBuf, reason: String },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
