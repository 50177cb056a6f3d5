//! Types for writing FIFF files
//!

use binrw::BinWrite;
use bon::Builder;
use byteorder::{BigEndian, ByteOrder, WriteBytesExt};
use std::io::{Cursor, Seek, SeekFrom, Write};
use tracing::{instrument, trace};

use crate::constants::{kind, next, types, MAX_DEPTH};
use crate::error::{Error, Result};
use crate::types::{DirEntry, FileId, StoredDirEntry, TagHeader};

/// Options for how the FIFF file should be written
#[derive(Debug, Default, Clone, Copy, Builder)]
pub struct FiffWriterOptions {
    /// Store a directory of all tags at the end of the file and point the file header at it
    #[builder(default)]
    pub directory: bool,
}

/// FIFF file generator
///
/// ```
/// # fn doit() -> fiff_tree::error::Result<()>
/// # {
/// use fiff_tree::constants::{block, types};
/// use fiff_tree::types::FileId;
/// use fiff_tree::write::{FiffWriter, FiffWriterOptions};
///
/// let mut fiff = FiffWriter::new(
///     std::io::Cursor::new(Vec::new()),
///     FiffWriterOptions::builder().directory(true).build(),
/// );
///
/// fiff.start_file(FileId::generate())?;
/// fiff.start_block(block::MEAS)?;
/// fiff.write_raw(3501, types::FLOAT, &[0x3F, 0x80, 0x00, 0x00])?;
/// fiff.end_block(block::MEAS)?;
///
/// // Write the directory and the end of file marker
/// fiff.finish()?;
///
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
pub struct FiffWriter<W: Write + Seek> {
    inner: W,
    options: FiffWriterOptions,
    blocks: Vec<i32>,
    written: Vec<DirEntry>,
    dir_pointer: Option<u64>,
}

impl<W: Write + Seek> FiffWriter<W> {
    /// Wrap a writer, nothing is written until the first tag.
    pub fn new(inner: W, options: FiffWriterOptions) -> FiffWriter<W> {
        FiffWriter {
            inner,
            options,
            blocks: Vec::new(),
            written: Vec::new(),
            dir_pointer: None,
        }
    }

    /// Number of blocks currently open
    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    /// Write the file header: the file identifier, directory pointer and free list.
    #[instrument(skip(self), err)]
    pub fn start_file(&mut self, id: FileId) -> Result<()> {
        self.write_id(kind::FILE_ID, Some(id))?;
        self.dir_pointer = Some(self.write_int_tag(kind::DIR_POINTER, -1)?);
        self.write_int(kind::FREE_LIST, -1)
    }

    /// Open a block of the given kind
    ///
    /// At most [`MAX_DEPTH`] blocks can be open at the same time.
    #[instrument(skip(self), err)]
    pub fn start_block(&mut self, block: i32) -> Result<()> {
        if self.blocks.len() >= MAX_DEPTH {
            return Err(Error::NestingTooDeep {
                block,
                pos: self.inner.stream_position()?,
                limit: MAX_DEPTH,
            });
        }

        self.write_int(kind::BLOCK_START, block)?;
        self.blocks.push(block);
        Ok(())
    }

    /// Close the innermost block, which must be of the given kind
    #[instrument(skip(self), err)]
    pub fn end_block(&mut self, block: i32) -> Result<()> {
        match self.blocks.last() {
            Some(&open) if open == block => {}
            open => {
                return Err(Error::BlockMismatch {
                    open: open.copied(),
                    closing: block,
                })
            }
        }

        self.write_int(kind::BLOCK_END, block)?;
        self.blocks.pop();
        Ok(())
    }

    /// Write an identifier tag, generating a fresh identifier when none is given
    #[instrument(skip(self), err)]
    pub fn write_id(&mut self, tag_kind: i32, id: Option<FileId>) -> Result<()> {
        let id = id.unwrap_or_else(FileId::generate);

        let mut data = Cursor::new(Vec::with_capacity(FileId::SIZE));
        id.write(&mut data)?;

        self.write_tag(tag_kind, types::ID_STRUCT, data.get_ref(), next::SEQ)?;
        Ok(())
    }

    /// Write a tag holding a single integer
    pub fn write_int(&mut self, tag_kind: i32, value: i32) -> Result<()> {
        self.write_int_tag(tag_kind, value)?;
        Ok(())
    }

    /// Write a tag with an already encoded payload
    pub fn write_raw(&mut self, tag_kind: i32, tag_type: u32, data: &[u8]) -> Result<()> {
        self.write_tag(tag_kind, tag_type, data, next::SEQ)?;
        Ok(())
    }

    /// Finish the file
    ///
    /// Fails when blocks are still open. For files started with [`FiffWriter::start_file`] the
    /// optional directory and the end of file marker are written.
    #[instrument(skip(self), err)]
    pub fn finish(mut self) -> Result<W> {
        if !self.blocks.is_empty() {
            return Err(Error::UnclosedBlocks(self.blocks));
        }

        if let Some(pointer) = self.dir_pointer {
            if self.options.directory {
                self.write_directory(pointer)?;
            }
            self.write_tag(kind::NOP, types::VOID, &[], next::NONE)?;
        }

        self.inner.flush()?;
        Ok(self.inner)
    }

    fn write_int_tag(&mut self, tag_kind: i32, value: i32) -> Result<u64> {
        let mut data = [0u8; 4];
        BigEndian::write_i32(&mut data, value);
        self.write_tag(tag_kind, types::INT, &data, next::SEQ)
    }

    fn write_directory(&mut self, pointer: u64) -> Result<()> {
        let mut data = Cursor::new(Vec::with_capacity(
            self.written.len() * StoredDirEntry::SIZE,
        ));
        for entry in &self.written {
            StoredDirEntry::try_from(entry)?.write(&mut data)?;
        }

        let dir_pos = self.write_tag(kind::DIR, types::DIR_ENTRY_STRUCT, data.get_ref(), next::SEQ)?;
        let dir_pos = i32::try_from(dir_pos).map_err(|_| Error::Overflow(dir_pos))?;

        let end = self.inner.stream_position()?;
        self.inner
            .seek(SeekFrom::Start(pointer + TagHeader::SIZE))?;
        self.inner.write_i32::<BigEndian>(dir_pos)?;
        self.inner.seek(SeekFrom::Start(end))?;

        Ok(())
    }

    fn write_tag(&mut self, tag_kind: i32, tag_type: u32, data: &[u8], next: i32) -> Result<u64> {
        let pos = self.inner.stream_position()?;
        let header = TagHeader {
            kind: tag_kind,
            tag_type,
            size: i32::try_from(data.len()).map_err(|_| Error::Overflow(data.len() as u64))?,
            next,
        };

        header.write(&mut self.inner)?;
        self.inner.write_all(data)?;

        trace!(kind = tag_kind, tag_type, size = header.size, pos, "wrote tag");
        self.written.push(DirEntry::from_header(&header, pos));
        Ok(pos)
    }
}
