//! Reconstruction of the block tree from a tag directory, and searching it
//!

use std::io::{Read, Seek};

use derive_more::derive::Deref;
use tracing::debug;

use crate::{
    constants::{kind, MAX_DEPTH, ROOT_BLOCK},
    error::{Error, Result},
    read::{Directory, ReadTagExt},
    types::{DirEntry, FileId},
};

/// A block of a FIFF file
///
/// Nodes borrow their tag descriptors from the [`Directory`] they were built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'d> {
    /// Kind of the block, [`ROOT_BLOCK`] for the file level block
    pub block: i32,

    /// Identifier of the block, or of the file for the root block
    pub id: Option<FileId>,

    /// Identifier of the block this one was copied from
    pub parent_id: Option<FileId>,

    /// Tags directly inside this block, `None` when there are none
    pub entries: Option<Vec<&'d DirEntry>>,

    /// Nested blocks in file order
    pub children: Vec<Node<'d>>,
}

impl<'d> Node<'d> {
    fn new(block: i32) -> Self {
        Node {
            block,
            id: None,
            parent_id: None,
            entries: None,
            children: Vec::new(),
        }
    }

    /// Build the tree of a whole directory.
    ///
    /// The result is always the implicit root block, top level blocks become its children.
    pub fn build<R: Read + Seek>(reader: &mut R, directory: &'d Directory) -> Result<Node<'d>> {
        let (root, _) = Self::scan_block(reader, directory, 0, None, ROOT_BLOCK, 0)?;
        Ok(root)
    }

    /// Build the node starting at `start`.
    ///
    /// When `start` is a block start the node is that block and the returned index is the
    /// one after its matching block end. Otherwise the node is an implicit root block covering
    /// the rest of the directory.
    pub fn build_from<R: Read + Seek>(
        reader: &mut R,
        directory: &'d Directory,
        start: usize,
    ) -> Result<(Node<'d>, usize)> {
        Self::build_at(reader, directory, start, 0)
    }

    fn build_at<R: Read + Seek>(
        reader: &mut R,
        directory: &'d Directory,
        start: usize,
        depth: usize,
    ) -> Result<(Node<'d>, usize)> {
        match directory.get(start) {
            Some(opener) if opener.kind == kind::BLOCK_START => {
                let block = reader.read_int_tag(opener)?;
                if depth > MAX_DEPTH {
                    return Err(Error::NestingTooDeep {
                        block,
                        pos: opener.pos,
                        limit: MAX_DEPTH,
                    });
                }
                Self::scan_block(reader, directory, start + 1, Some(opener), block, depth)
            }
            _ => Self::scan_block(reader, directory, start, None, ROOT_BLOCK, depth),
        }
    }

    fn scan_block<R: Read + Seek>(
        reader: &mut R,
        directory: &'d Directory,
        mut this: usize,
        opener: Option<&'d DirEntry>,
        block: i32,
        depth: usize,
    ) -> Result<(Node<'d>, usize)> {
        debug!(depth, "start {{ {}", block);

        let mut node = Node::new(block);
        let mut entries = Vec::new();

        while let Some(entry) = directory.get(this) {
            match entry.kind {
                kind::BLOCK_START => {
                    let (child, next) = Self::build_at(reader, directory, this, depth + 1)?;
                    node.children.push(child);
                    this = next;
                    continue;
                }
                kind::BLOCK_END => {
                    let closing = reader.read_int_tag(entry)?;
                    if opener.is_some() && closing == block {
                        return Ok((node.seal(entries, depth), this + 1));
                    }

                    return Err(Error::UnexpectedBlockEnd {
                        expected: opener.map(|_| block),
                        found: closing,
                        pos: entry.pos,
                    });
                }
                _ => {
                    node.record_identity(reader, entry)?;
                    entries.push(entry);
                }
            }
            this += 1;
        }

        match opener {
            Some(start) => Err(Error::UnmatchedBlockStart {
                block,
                pos: start.pos,
            }),
            None => Ok((node.seal(entries, depth), this)),
        }
    }

    fn record_identity<R: Read + Seek>(&mut self, reader: &mut R, entry: &DirEntry) -> Result<()> {
        match (self.block, entry.kind) {
            (ROOT_BLOCK, kind::FILE_ID) => self.id = Some(reader.read_id(entry)?),
            (ROOT_BLOCK, _) => {}
            (_, kind::BLOCK_ID) => self.id = Some(reader.read_id(entry)?),
            (_, kind::PARENT_BLOCK_ID) => self.parent_id = Some(reader.read_id(entry)?),
            _ => {}
        }
        Ok(())
    }

    fn seal(mut self, entries: Vec<&'d DirEntry>, depth: usize) -> Self {
        if !entries.is_empty() {
            self.entries = Some(entries);
        }

        debug!(
            depth,
            nent = self.nent(),
            nchild = self.nchild(),
            "end }} {}",
            self.block
        );
        self
    }

    /// Number of tags directly inside this block
    pub fn nent(&self) -> usize {
        self.entries.as_ref().map_or(0, Vec::len)
    }

    /// Number of nested blocks
    pub fn nchild(&self) -> usize {
        self.children.len()
    }

    /// Iterate over this node and all nodes below it in pre-order, with their depth
    pub fn walk(&self) -> Walk<'_, 'd> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Find all nodes of a block kind, this node included, in pre-order
    pub fn find(&self, block: i32) -> Forest<'_, 'd> {
        self.walk()
            .map(|(_, node)| node)
            .filter(|node| node.block == block)
            .collect()
    }
}

/// Pre-order iterator over a tree, see [`Node::walk`]
pub struct Walk<'n, 'd> {
    stack: Vec<(usize, &'n Node<'d>)>,
}

impl<'n, 'd> Iterator for Walk<'n, 'd> {
    type Item = (usize, &'n Node<'d>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

/// An ordered list of trees
///
/// Searching and copying accept a forest, a single node converts into a forest of one.
#[derive(Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct Forest<'n, 'd>(Vec<&'n Node<'d>>);

impl<'n, 'd> Forest<'n, 'd> {
    /// Find all nodes of a block kind in every tree of the forest, in order
    pub fn find(&self, block: i32) -> Forest<'n, 'd> {
        self.0.iter().flat_map(|&node| node.find(block)).collect()
    }
}

impl<'n, 'd> From<&'n Node<'d>> for Forest<'n, 'd> {
    fn from(value: &'n Node<'d>) -> Self {
        Forest(vec![value])
    }
}

impl<'n, 'd> From<&'n [Node<'d>]> for Forest<'n, 'd> {
    fn from(value: &'n [Node<'d>]) -> Self {
        value.iter().collect()
    }
}

impl<'n, 'd> From<Vec<&'n Node<'d>>> for Forest<'n, 'd> {
    fn from(value: Vec<&'n Node<'d>>) -> Self {
        Forest(value)
    }
}

impl<'n, 'd> FromIterator<&'n Node<'d>> for Forest<'n, 'd> {
    fn from_iter<T: IntoIterator<Item = &'n Node<'d>>>(iter: T) -> Self {
        Forest(iter.into_iter().collect())
    }
}

impl<'n, 'd> IntoIterator for Forest<'n, 'd> {
    type Item = &'n Node<'d>;
    type IntoIter = std::vec::IntoIter<&'n Node<'d>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
