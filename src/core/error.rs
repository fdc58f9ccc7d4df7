use std::{io, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

pub type Result<T, E = AuditError> = std::result::Result<T, E>;

/// Failure while loading a localization file.
///
/// Every variant carries the path of the offending file. Any of these aborts
/// the whole audit.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("translation file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read translation file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("translation file {} is not valid UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to parse JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("translation file {} must contain a JSON object, found {found}", path.display())]
    NotAnObject { path: PathBuf, found: &'static str },
}

impl AuditError {
    pub fn path(&self) -> &PathBuf {
        match self {
            AuditError::FileNotFound { path }
            | AuditError::Read { path, .. }
            | AuditError::Decode { path, .. }
            | AuditError::Parse { path, .. }
            | AuditError::NotAnObject { path, .. } => path,
        }
    }
}
