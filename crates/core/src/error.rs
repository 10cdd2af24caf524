use std::path::PathBuf;
use thiserror::Error;

use crate::types::CaptionId;

#[derive(Error, Debug)]
pub enum CaptionerError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No caption with id {id}")]
    UnknownCaption { id: CaptionId },

    #[error("Invalid time value: {value}")]
    InvalidTime { value: String },
}

pub type Result<T> = std::result::Result<T, CaptionerError>;
