//! Crate error type.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the caller of the session API.
///
/// Only session-fatal conditions appear here. Mid-session seek/read
/// failures are absorbed by [`FileView`](crate::view::FileView) as empty
/// reads and never reach this type.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be opened (or initially read) at startup.
    #[error("cannot open {path}: {source}", path = .path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Terminal or rendering I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
