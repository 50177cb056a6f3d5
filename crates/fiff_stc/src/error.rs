//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// File is too short to hold a source estimate header, or not made of whole 4 byte values
    #[error("Invalid STC file")]
    InvalidFile,

    /// The data block does not match the vertex and time counts
    #[error("expected {expected} samples but the file holds {found}")]
    SampleCountMismatch { expected: u64, found: u64 },

    /// The estimate cannot be written as it is
    #[error("inconsistent source estimate: {0}")]
    InconsistentData(String),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
