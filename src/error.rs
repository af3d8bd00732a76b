use std::path::PathBuf;

use thiserror::Error;

/// Every failure the wire-dump library can report.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line}: expected 11 columns but found {found}")]
    TokenCount { line: usize, found: usize },
    #[error("Line {line}, column {}: '{token}' is not a number", .column + 1)]
    Number {
        line: usize,
        /// Zero-based token index; shown one-based in the message.
        column: usize,
        token: String,
    },
    #[error("Unknown wire field '{0}'")]
    UnknownField(String),
    #[error("Plane {0} is out of range; expected 0, 1 or 2")]
    PlaneOutOfRange(i64),
    #[error("Sampling stride must be at least 1 (wire: {wire}, text: {text})")]
    InvalidSampling { wire: usize, text: usize },
    #[error("Plot requests {tpcs} TPCs but provides {offsets} label offsets")]
    OffsetMismatch { tpcs: usize, offsets: usize },
    #[error("PDF document failed: {0}")]
    Pdf(String),
}

impl WireError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WireError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WireError>;
