use std::path::PathBuf;
use thiserror::Error;

pub type BakeResult<T> = std::result::Result<T, BakeError>;

#[derive(Debug, Error)]
pub enum BakeError {
    #[error("cannot read source {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse SVG {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: usvg::Error,
    },

    #[error("source image has no usable size ({width}x{height})")]
    InvalidSize { width: f32, height: f32 },

    #[error("cannot allocate a {width}x{height} pixmap")]
    Allocate { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot write config {}: {reason}", path.display())]
    ConfigWrite { path: PathBuf, reason: String },
}
