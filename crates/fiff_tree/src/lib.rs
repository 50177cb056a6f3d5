//! This library handles reading, searching and copying the block tree of **FIFF** files.
//!
//! # FIFF Format Documentation
//!
//! FIFF is a tagged container format used to store electrophysiology recordings and everything
//! derived from them. A file is a flat sequence of tags. Special tags open and close blocks,
//! which gives the flat sequence a tree structure.
//!
//! ## Tag Structure
//!
//! Every tag consists of a fixed header directly followed by its payload.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Kind                   | 4 bytes: What the tag describes                            |
//! | 0x0004         | Type                   | 4 bytes: Data type of the payload                          |
//! | 0x0008         | Size                   | 4 bytes: Size of the payload in bytes                      |
//! | 0x000C         | Next                   | 4 bytes: Position of the next tag                          |
//! | 0x0010         | Data                   | (Size) bytes: The payload                                  |
//!
//! - **Next**: `0` when the next tag follows directly, `-1` for the last tag of the file, or an
//!   absolute offset to jump to.
//!
//! ### Blocks
//!
//! A block starts with a `BLOCK_START` tag and ends with a `BLOCK_END` tag. Both carry the kind of
//! the block as a single integer payload. Blocks nest, and every tag between the two sentinels
//! that is not inside a nested block belongs to the block.
//!
//! ### Identifiers
//!
//! A file starts with a `FILE_ID` tag. Blocks may carry a `BLOCK_ID` and, when they were copied
//! from another file, a `PARENT_BLOCK_ID` and `PARENT_FILE_ID`. Identifiers are 20 bytes:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Version                | 4 bytes: Format version                                 |
//! | 0x0004         | Machine ID             | 8 bytes: Identifies the creating machine                |
//! | 0x000C         | Seconds                | 4 bytes: Creation time                                  |
//! | 0x0010         | Microseconds           | 4 bytes: Creation time, fractional part                 |
//!
//! ### Directory
//!
//! The second tag of a file is a `DIR_POINTER`. When positive it holds the offset of a `DIR` tag
//! listing the kind, type, size and position of every tag, so the file does not need to be
//! scanned.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.fif`
//! - **Endianness**: Big-endian for all multi-byte integers
//!
//! # Usage
//!
//! ```no_run
//! use std::fs::File;
//! use fiff_tree::{constants::block, copy_tree, Directory, FiffWriter, Node};
//! use fiff_tree::write::FiffWriterOptions;
//! use fiff_tree::types::FileId;
//!
//! fn extract_measurement_info(input: &str, output: &str) -> fiff_tree::error::Result<()> {
//!     let mut source = File::open(input)?;
//!     let directory = Directory::open(&mut source)?;
//!     let tree = Node::build(&mut source, &directory)?;
//!
//!     let mut fiff = FiffWriter::new(File::create(output)?, FiffWriterOptions::default());
//!     fiff.start_file(FileId::generate())?;
//!     copy_tree(&mut source, tree.id, tree.find(block::MEAS_INFO), &mut fiff)?;
//!     fiff.finish()?;
//!
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod copy;
pub mod error;
pub mod read;
pub mod tree;
pub mod types;
pub mod write;

pub use copy::copy_tree;
pub use read::{Directory, ReadTagExt};
pub use tree::{Forest, Node};
pub use write::FiffWriter;
