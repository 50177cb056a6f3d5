//! # STC Format Documentation
//!
//! This crate provides utilities to read and write the **STC** format, a flat file holding a
//! source estimate: the activity of a list of source space vertices over time. STC files are
//! typically identified with the `.stc` extension, one file per hemisphere.
//!
//! ## File Structure
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Start Time             | 4 bytes: Time of the first sample in milliseconds (float)  |
//! | 0x0004         | Time Step              | 4 bytes: Time between samples in milliseconds (float)      |
//! | 0x0008         | Vertex Count           | 4 bytes: Number of vertices                                |
//! | 0x000C         | Vertices               | (Vertex Count * 4) bytes: Vertex numbers                   |
//! | ...            | Time Count             | 4 bytes: Number of time samples                            |
//! | ...            | Data                   | (Vertex Count * Time Count * 4) bytes: Samples (float)     |
//!
//! ### Data
//!
//! Samples are stored one time point after the other, each time point holding one value per
//! vertex in the order of the vertex list.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.stc`
//! - **Endianness**: Big-endian for all multi-byte values
//! - Times are stored in milliseconds but exposed in seconds
//!

pub mod error;
pub mod read;
pub mod types;
pub mod write;

pub use read::read_stc;
pub use types::SourceEstimate;
pub use write::write_stc;
