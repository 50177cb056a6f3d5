//! Types for reading tags and the tag directory of FIFF files
//!

use binrw::BinRead;
use byteorder::{BigEndian, ReadBytesExt};
use derive_more::derive::{Constructor, Deref};
use std::io::{Read, Seek, SeekFrom};
use tracing::{debug, instrument, trace};

use crate::{
    constants::{kind, next, types},
    error::{Error, Result},
    types::{DirEntry, FileId, StoredDirEntry, Tag, TagHeader},
};

/// Reading of individual tags from any seekable source
///
/// Only the payloads the tree engine needs are decoded, everything else is returned as raw bytes.
pub trait ReadTagExt: Read + Seek + Sized {
    /// Read the header of the tag starting at `pos`
    fn read_tag_header(&mut self, pos: u64) -> Result<TagHeader> {
        self.seek(SeekFrom::Start(pos))?;
        Ok(TagHeader::read(self)?)
    }

    /// Read the raw header and payload bytes of a tag
    fn read_tag(&mut self, entry: &DirEntry) -> Result<Tag> {
        self.seek(SeekFrom::Start(entry.pos))?;
        Ok(Tag::read(self)?)
    }

    /// Read a tag holding a single integer, such as a block sentinel
    fn read_int_tag(&mut self, entry: &DirEntry) -> Result<i32> {
        expect_type(entry, types::INT)?;
        if entry.size < 4 {
            return Err(Error::TruncatedTag { pos: entry.pos });
        }

        self.seek(SeekFrom::Start(entry.data_pos()))?;
        Ok(self.read_i32::<BigEndian>()?)
    }

    /// Read a tag holding an identifier
    fn read_id(&mut self, entry: &DirEntry) -> Result<FileId> {
        expect_type(entry, types::ID_STRUCT)?;
        if (entry.size as usize) < FileId::SIZE {
            return Err(Error::TruncatedTag { pos: entry.pos });
        }

        self.seek(SeekFrom::Start(entry.data_pos()))?;
        Ok(FileId::read(self)?)
    }
}

impl<R: Read + Seek> ReadTagExt for R {}

fn expect_type(entry: &DirEntry, expected: u32) -> Result<()> {
    if entry.tag_type != expected {
        return Err(Error::UnexpectedTagType {
            kind: entry.kind,
            expected,
            found: entry.tag_type,
            pos: entry.pos,
        });
    }
    Ok(())
}

/// Ordered list of every tag in a file
///
/// ```no_run
/// use std::fs::File;
///
/// fn list_tags(path: &str) -> fiff_tree::error::Result<()> {
///     let mut file = File::open(path)?;
///     let directory = fiff_tree::Directory::open(&mut file)?;
///
///     for entry in directory.iter() {
///         println!("kind {} ({} bytes) at {}", entry.kind, entry.size, entry.pos);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Constructor, Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct Directory(Vec<DirEntry>);

impl Directory {
    /// Open a FIFF file and read its directory.
    ///
    /// The file must start with a file identifier. When the file header points at a stored
    /// directory that one is used, otherwise every tag of the file is scanned.
    #[instrument(skip_all, err)]
    pub fn open<R: Read + Seek>(reader: &mut R) -> Result<Directory> {
        let first = reader.read_tag_header(0)?;
        if first.kind != kind::FILE_ID {
            return Err(Error::NotFiffFile { found: first.kind });
        }

        let second_pos = match first.next {
            next::SEQ => TagHeader::SIZE + first.size as u64,
            n if n > 0 => n as u64,
            _ => return Self::scan(reader),
        };

        let second = DirEntry::from_header(&reader.read_tag_header(second_pos)?, second_pos);
        if second.kind == kind::DIR_POINTER {
            let dir_pos = reader.read_int_tag(&second)?;
            if dir_pos > 0 {
                return Self::read_stored(reader, dir_pos as u64);
            }
        }

        Self::scan(reader)
    }

    /// Build the directory by following the tag chain from the start of the stream.
    #[instrument(skip_all, err)]
    pub fn scan<R: Read + Seek>(reader: &mut R) -> Result<Directory> {
        let end = reader.seek(SeekFrom::End(0))?;

        let mut entries = Vec::new();
        let mut pos = 0u64;
        while pos < end {
            if pos + TagHeader::SIZE > end {
                return Err(Error::TruncatedTag { pos });
            }

            let header = reader.read_tag_header(pos)?;
            let data_end = pos + TagHeader::SIZE + header.size as u64;
            if data_end > end {
                return Err(Error::TruncatedTag { pos });
            }

            trace!(kind = header.kind, size = header.size, pos, "found tag");
            entries.push(DirEntry::from_header(&header, pos));

            pos = match header.next {
                next::SEQ => data_end,
                next::NONE => break,
                n if n > 0 && n as u64 > pos => n as u64,
                n => return Err(Error::InvalidNextPointer { pos, next: n }),
            };
        }

        debug!(tags = entries.len(), "scanned directory");
        Ok(Directory(entries))
    }

    fn read_stored<R: Read + Seek>(reader: &mut R, pos: u64) -> Result<Directory> {
        let entry = DirEntry::from_header(&reader.read_tag_header(pos)?, pos);
        if entry.kind != kind::DIR {
            return Err(Error::InvalidDirectory { pos });
        }
        expect_type(&entry, types::DIR_ENTRY_STRUCT)?;

        let count = entry.size as usize / StoredDirEntry::SIZE;
        let entries = (0..count)
            .map(|_| {
                StoredDirEntry::read(reader)
                    .map(DirEntry::from)
                    .map_err(Error::from)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(tags = entries.len(), pos, "read stored directory");
        Ok(Directory(entries))
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use crate::constants::{kind, next, types};
    use crate::error::{Error, Result};
    use crate::read::{Directory, ReadTagExt};
    use crate::types::DirEntry;

    #[traced_test]
    #[test]
    fn scan_sequential_tags() -> Result<()> {
        #[rustfmt::skip]
        let mut reader = Cursor::new(vec![
            // Block start
            0x00, 0x00, 0x00, 0x68, 0x00, 0x00, 0x00, 0x03,
            0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x65,
            // Data
            0x00, 0x00, 0x01, 0x2C, 0x00, 0x00, 0x00, 0x01,
            0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00,
            0xCA, 0xFE,
            // Block end
            0x00, 0x00, 0x00, 0x69, 0x00, 0x00, 0x00, 0x03,
            0x00, 0x00, 0x00, 0x04, 0xFF, 0xFF, 0xFF, 0xFF,
            0x00, 0x00, 0x00, 0x65,
        ]);

        let directory = Directory::scan(&mut reader)?;

        assert_eq!(
            *directory,
            vec![
                DirEntry { kind: kind::BLOCK_START, tag_type: types::INT, size: 4, pos: 0, next: next::SEQ },
                DirEntry { kind: 300, tag_type: types::BYTE, size: 2, pos: 20, next: next::SEQ },
                DirEntry { kind: kind::BLOCK_END, tag_type: types::INT, size: 4, pos: 38, next: next::NONE },
            ]
        );

        assert_eq!(reader.read_int_tag(&directory[0])?, 101);
        assert_eq!(reader.read_tag(&directory[1])?.data, vec![0xCA, 0xFE]);

        Ok(())
    }

    #[test]
    fn scan_follows_next_pointer() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            // Jumps over the padding below
            0x00, 0x00, 0x01, 0x2C, 0x00, 0x00, 0x00, 0x01,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x14,
            0xDE, 0xAD, 0xBE, 0xEF,
            0x00, 0x00, 0x01, 0x2D, 0x00, 0x00, 0x00, 0x01,
            0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ]);

        let directory = Directory::scan(&mut input)?;

        assert_eq!(directory.len(), 2);
        assert_eq!(directory[1].kind, 301);
        assert_eq!(directory[1].pos, 20);

        Ok(())
    }

    #[test]
    fn scan_rejects_backward_pointer() {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x00, 0x00, 0x01, 0x2C, 0x00, 0x00, 0x00, 0x01,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
            0x00, 0x00, 0x01, 0x2D, 0x00, 0x00, 0x00, 0x01,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08,
        ]);

        assert!(matches!(
            Directory::scan(&mut input),
            Err(Error::InvalidNextPointer { pos: 16, next: 8 })
        ));
    }

    #[test]
    fn scan_rejects_truncated_payload() {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x00, 0x00, 0x01, 0x2C, 0x00, 0x00, 0x00, 0x01,
            0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00,
            0x01, 0x02,
        ]);

        assert!(matches!(
            Directory::scan(&mut input),
            Err(Error::TruncatedTag { pos: 0 })
        ));
    }

    #[test]
    fn open_requires_file_id() {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x00, 0x00, 0x00, 0x68, 0x00, 0x00, 0x00, 0x03,
            0x00, 0x00, 0x00, 0x04, 0xFF, 0xFF, 0xFF, 0xFF,
            0x00, 0x00, 0x00, 0x65,
        ]);

        assert!(matches!(
            Directory::open(&mut input),
            Err(Error::NotFiffFile { found: 104 })
        ));
    }

    #[test]
    fn read_int_checks_type() {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x00, 0x00, 0x00, 0x68, 0x00, 0x00, 0x00, 0x04,
            0x00, 0x00, 0x00, 0x04, 0xFF, 0xFF, 0xFF, 0xFF,
            0x3F, 0x80, 0x00, 0x00,
        ]);

        let entry = DirEntry { kind: kind::BLOCK_START, tag_type: types::FLOAT, size: 4, pos: 0, next: next::NONE };

        assert!(matches!(
            input.read_int_tag(&entry),
            Err(Error::UnexpectedTagType { expected: types::INT, found: types::FLOAT, .. })
        ));
    }

    #[test]
    fn read_int_tag_beside_byteorder() -> Result<()> {
        use byteorder::{BigEndian, ReadBytesExt};

        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x00, 0x00, 0x00, 0x65, 0x00, 0x00, 0x00, 0x03,
            0x00, 0x00, 0x00, 0x04, 0xFF, 0xFF, 0xFF, 0xFF,
            0x00, 0x00, 0x01, 0x00,
        ]);

        let entry = DirEntry { kind: kind::DIR_POINTER, tag_type: types::INT, size: 4, pos: 0, next: next::NONE };

        assert_eq!(input.read_int_tag(&entry)?, 256);
        input.set_position(16);
        assert_eq!(input.read_int::<BigEndian>(4)?, 256);

        Ok(())
    }
}
