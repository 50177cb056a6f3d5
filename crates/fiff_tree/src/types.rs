//! Base types for the structure of a FIFF file.

use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use binrw::{BinRead, BinWrite};

use crate::constants::FIFF_VERSION;
use crate::error::{Error, Result};

/// FIFF tag header
///
/// Every tag starts with this header, directly followed by `size` bytes of data.
/// All fields are stored in big endian format.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(big)]
pub struct TagHeader {
    /// What the tag describes
    pub kind: i32,

    /// The data type of the payload
    pub tag_type: u32,

    /// The size of the payload in bytes
    #[br(assert(size >= 0))]
    pub size: i32,

    /// Offset of the next tag, or one of [`crate::constants::next`]
    pub next: i32,
}

impl TagHeader {
    /// Size of the encoded header in bytes
    pub const SIZE: u64 = 16;
}

/// A complete tag, header and raw payload
#[derive(BinRead, BinWrite, Debug, Default, Clone, PartialEq, Eq)]
#[brw(big)]
pub struct Tag {
    pub header: TagHeader,

    #[br(count = header.size as usize)]
    pub data: Vec<u8>,
}

/// Unique identifier of a file or block
///
/// The engine never looks inside an identifier, it is only compared and copied.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[brw(big)]
pub struct FileId {
    /// Format version the identifier was created with
    pub version: i32,

    /// Identifies the machine that created the identifier
    pub machid: [i32; 2],

    /// Creation time, seconds since the epoch
    pub secs: i32,

    /// Creation time, microsecond part
    pub usecs: i32,
}

static SEQUENCE: AtomicI32 = AtomicI32::new(0);

impl FileId {
    /// Size of the encoded identifier in bytes
    pub const SIZE: usize = 20;

    /// Create a fresh identifier from the current time.
    ///
    /// The machine id is made of the process id and a per process sequence number, so two
    /// identifiers generated within the same microsecond still differ.
    pub fn generate() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();

        FileId {
            version: FIFF_VERSION,
            machid: [
                std::process::id() as i32,
                SEQUENCE.fetch_add(1, Ordering::Relaxed),
            ],
            secs: now.as_secs() as i32,
            usecs: now.subsec_micros() as i32,
        }
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} {:08x}:{:08x} {}.{:06}",
            self.version >> 16,
            self.version & 0xFFFF,
            self.machid[0],
            self.machid[1],
            self.secs,
            self.usecs
        )
    }
}

/// A directory entry as it is stored inside a `DIR` tag
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(big)]
pub struct StoredDirEntry {
    pub kind: i32,
    pub tag_type: u32,
    pub size: i32,
    pub pos: i32,
}

impl StoredDirEntry {
    /// Size of an encoded entry in bytes
    pub const SIZE: usize = 16;
}

/// Describes a single tag of a file without its payload
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// What the tag describes
    pub kind: i32,

    /// The data type of the payload
    pub tag_type: u32,

    /// The size of the payload in bytes
    pub size: i32,

    /// Offset of the tag header from the start of the file
    pub pos: u64,

    /// The next pointer as found in the tag header
    pub next: i32,
}

impl DirEntry {
    pub fn from_header(header: &TagHeader, pos: u64) -> Self {
        DirEntry {
            kind: header.kind,
            tag_type: header.tag_type,
            size: header.size,
            pos,
            next: header.next,
        }
    }

    /// Offset of the payload from the start of the file
    pub fn data_pos(&self) -> u64 {
        self.pos + TagHeader::SIZE
    }
}

impl From<StoredDirEntry> for DirEntry {
    fn from(value: StoredDirEntry) -> Self {
        DirEntry {
            kind: value.kind,
            tag_type: value.tag_type,
            size: value.size,
            pos: value.pos as u64,
            next: crate::constants::next::SEQ,
        }
    }
}

impl TryFrom<&DirEntry> for StoredDirEntry {
    type Error = Error;

    fn try_from(value: &DirEntry) -> Result<Self> {
        Ok(StoredDirEntry {
            kind: value.kind,
            tag_type: value.tag_type,
            size: value.size,
            pos: i32::try_from(value.pos).map_err(|_| Error::Overflow(value.pos))?,
        })
    }
}
