// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NpcaError {
    #[error("cannot annotate {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, NpcaError>;

impl NpcaError {
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        NpcaError::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        NpcaError::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to NpcaError::Io with unknown path.
impl From<std::io::Error> for NpcaError {
    fn from(source: std::io::Error) -> Self {
        NpcaError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for NpcaError {
    fn from(e: walkdir::Error) -> Self {
        let path = e
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from);
        match e.into_io_error() {
            Some(io) => NpcaError::Io { source: io, path },
            None => NpcaError::Io {
                source: std::io::Error::new(std::io::ErrorKind::Other, "file system walk failed"),
                path,
            },
        }
    }
}
