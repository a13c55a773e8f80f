// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Error type for Hexview

use thiserror::Error;

/// Result type, equivalent to [std::result::Result]<T, [enum@Error]>
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Hexview.
#[derive(Debug, Error)]
pub enum Error {
    /// The span is longer than the table can address
    #[error("span of {len} bytes exceeds the {max:#06x}-byte limit")]
    LengthOutOfRange {
        /// The offending length
        len: usize,
        /// The longest span a table can hold
        max: usize,
    },
    /// Tried to convert a string into a [Color](crate::color::Color), but it did not match.
    #[error("no suitable conversion of \"{name}\" into Color")]
    InvalidColor {
        /// The string which failed to become a color
        name: String,
    },
    /// Error originated in [std::io], usually a [Sink](crate::sink::Sink) refusing a fragment
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Error originated in [std::fmt]
    #[error(transparent)]
    FmtError(#[from] std::fmt::Error),
}
