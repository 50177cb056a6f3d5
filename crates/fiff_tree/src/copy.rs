//! Copying subtrees of one FIFF file into another
//!

use std::io::{Read, Seek, Write};

use tracing::{debug, instrument};

use crate::{
    constants::kind,
    error::Result,
    read::ReadTagExt,
    tree::{Forest, Node},
    types::FileId,
    write::FiffWriter,
};

/// Copy nodes and everything below them from `source` into `dest`.
///
/// Every copied block that had an identifier receives `out_id` as its new block identifier,
/// while its original identifier is kept as the parent block identifier. When `out_id` is
/// given it is also recorded as the parent file identifier. Without an `out_id` each block is
/// given a freshly generated identifier.
///
/// All other tags are copied byte for byte without being decoded. Trees nested deeper than
/// [`crate::constants::MAX_DEPTH`] blocks are rejected by the writer.
#[instrument(skip_all, err)]
pub fn copy_tree<'n, 'd: 'n, R, W>(
    source: &mut R,
    out_id: Option<FileId>,
    nodes: impl Into<Forest<'n, 'd>>,
    dest: &mut FiffWriter<W>,
) -> Result<()>
where
    R: Read + Seek,
    W: Write + Seek,
{
    for node in nodes.into() {
        copy_node(source, out_id, node, dest)?;
    }
    Ok(())
}

fn copy_node<R, W>(
    source: &mut R,
    out_id: Option<FileId>,
    node: &Node<'_>,
    dest: &mut FiffWriter<W>,
) -> Result<()>
where
    R: Read + Seek,
    W: Write + Seek,
{
    debug!(block = node.block, nent = node.nent(), nchild = node.nchild(), "copying block");
    dest.start_block(node.block)?;

    if let Some(id) = node.id {
        if out_id.is_some() {
            dest.write_id(kind::PARENT_FILE_ID, out_id)?;
        }
        dest.write_id(kind::BLOCK_ID, out_id)?;
        dest.write_id(kind::PARENT_BLOCK_ID, Some(id))?;
    }

    for entry in node.entries.iter().flatten() {
        if matches!(
            entry.kind,
            kind::BLOCK_ID | kind::PARENT_BLOCK_ID | kind::PARENT_FILE_ID
        ) {
            continue;
        }

        let tag = source.read_tag(entry)?;
        dest.write_raw(tag.header.kind, tag.header.tag_type, &tag.data)?;
    }

    for child in &node.children {
        copy_node(source, out_id, child, dest)?;
    }

    dest.end_block(node.block)
}
