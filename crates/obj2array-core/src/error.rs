//! Error types for mesh conversion operations.

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error type for OBJ parsing and float-array emission.
///
/// None of these are recovered from internally; each aborts the
/// conversion and propagates to the caller.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A recognized record line holds a field that cannot be parsed
    /// as a number, or a face descriptor is missing a field the
    /// record's first descriptor declared.
    #[error("Format error: {0}")]
    FormatError(String),

    /// A face dereferences an attribute slot it never supplied, or an
    /// index outside the bounds of the parsed sequence.
    #[error("Index error: {0}")]
    IndexError(String),

    /// File I/O error.
    ///
    /// The input file cannot be read or the output path is not
    /// writable.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
