//! Errors for whole-file operations.
//!
//! Individual entries never fail; they are skipped and counted instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON for this input", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize entries to {}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DictError {
    /// The file the failed operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DictError::Read { path, .. }
            | DictError::Parse { path, .. }
            | DictError::Write { path, .. }
            | DictError::Serialize { path, .. } => path,
        }
    }
}
