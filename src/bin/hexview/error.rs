//! Error type for the hexview binary

use std::{ops::Range, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Error originated in [`hexview`]
    #[error(transparent)]
    Hexview(#[from] hexview::error::Error),
    /// Error originated in [`std::io`]
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The requested bytes run past the end of the file
    #[error("{range:#x?} is outside of {} ({len:#x} bytes)", .file.display())]
    OutOfBounds {
        /// The file being dumped
        file: PathBuf,
        /// The offending range
        range: Range<usize>,
        /// Length of the file
        len: usize,
    },
}
