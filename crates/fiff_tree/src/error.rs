//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// file does not start with a file identifier tag
    #[error("file does not start with a file identifier tag (found kind {found})")]
    NotFiffFile { found: i32 },

    /// a block was opened but never closed before the directory ended
    #[error("block {block} starting at offset {pos} has no matching end")]
    #[diagnostic(help("the container is truncated or its block sentinels are corrupt"))]
    UnmatchedBlockStart { block: i32, pos: u64 },

    /// a block end sentinel does not close the innermost open block
    #[error("unexpected end of block {found} at offset {pos} (open block: {expected:?})")]
    UnexpectedBlockEnd {
        expected: Option<i32>,
        found: i32,
        pos: u64,
    },

    /// a tag carries a different data type than its kind requires
    #[error("tag {kind} at offset {pos} has type {found}, expected {expected}")]
    UnexpectedTagType {
        kind: i32,
        expected: u32,
        found: u32,
        pos: u64,
    },

    /// a tag points at a next tag that would not move the scan forward
    #[error("tag at offset {pos} has an invalid next pointer {next}")]
    InvalidNextPointer { pos: u64, next: i32 },

    /// blocks are nested deeper than [`crate::constants::MAX_DEPTH`]
    #[error("block {block} at offset {pos} is nested deeper than {limit} blocks")]
    NestingTooDeep { block: i32, pos: u64, limit: usize },

    /// a tag extends beyond the end of the file
    #[error("tag at offset {pos} is truncated")]
    TruncatedTag { pos: u64 },

    /// the directory pointer does not reference a stored directory
    #[error("no stored directory at offset {pos}")]
    InvalidDirectory { pos: u64 },

    /// an offset or payload does not fit the 32 bit fields of the format
    #[error("value {0} does not fit in a 32 bit tag field")]
    Overflow(u64),

    /// a block was ended while a different block is open
    #[error("cannot end block {closing} while block {open:?} is open")]
    BlockMismatch { open: Option<i32>, closing: i32 },

    /// the writer was finished with blocks still open
    #[error("blocks {0:?} were never ended")]
    UnclosedBlocks(Vec<i32>),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
