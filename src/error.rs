//! Errors returned by scalesheet.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::key_signature::Accidental;

/// Errors raised while building, rendering or emitting a sheet.
#[derive(Debug, Error)]
pub enum Error {
    /// A root or accidental name missing from one of the pitch tables.
    #[error("unknown pitch class {0:?}")]
    UnknownPitchClass(String),

    /// An accidental count outside the supported range.
    #[error("invalid key signature: {count} {accidental}s")]
    InvalidKeySignature { accidental: Accidental, count: usize },

    /// An optional post-processing tool is missing or failed.
    #[error("external tool {tool} failed: {reason}")]
    ExternalTool { tool: String, reason: String },

    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A config file or layout summary is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the run can continue past this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ExternalTool { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
