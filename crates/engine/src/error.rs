// crates/engine/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The source path does not exist. Per-source, non-fatal.
    #[error("No such file or directory")]
    NotFound,

    /// The source path names a directory. Per-source, non-fatal.
    #[error("Is a directory")]
    IsDirectory,

    /// I/O failure while reading an otherwise-valid source. Per-source,
    /// non-fatal; the remaining sources are still processed.
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),

    /// Explicit path operands and a source-list file were both supplied.
    /// Fatal before any source is processed.
    #[error("file operands cannot be combined with --files0-from")]
    ConflictingInputs,

    /// The source-list file does not exist. Fatal; no sources are produced.
    #[error("cannot open '{}' for reading: No such file or directory", path.display())]
    ManifestNotFound { path: PathBuf },

    /// The source-list file is a directory. Fatal; no sources are produced.
    #[error("{}: read error: Is a directory", path.display())]
    ManifestIsDirectory { path: PathBuf },

    /// Any other failure reading the source-list file.
    #[error("cannot read '{}': {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
