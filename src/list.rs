use std::{ops::Index, slice};

use crate::{
    block::Block,
    error::{Error, Result},
};

/// Ordered partition of the address space into [`Block`]s.
///
/// Blocks are kept in a growable arena sorted by ascending `start`. They
/// cover `[0, total)` with no gaps and no overlaps:
///
/// ```text
/// 0          29 30                69 70            99
/// +------------+--------------------+---------------+
/// |  A (30)    |     B (40)         |   free (30)   |
/// +------------+--------------------+---------------+
/// ```
///
/// Splitting a block replaces the element at `index` with two elements and
/// merging replaces two neighbours with one, so address order never has to be
/// restored by sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockList {
    blocks: Vec<Block>,
}

pub type Iter<'a> = slice::Iter<'a, Block>;

impl BlockList {
    /// Creates a list made of a single free block spanning `[0, total)`.
    pub fn new(total: usize) -> Self {
        Self {
            blocks: vec![Block::free(0, total)],
        }
    }

    /// Builds a list from already laid out blocks. The caller is expected to
    /// [`check`](Self::check) the result.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Hands the block at `index` to `owner`, or frees it when `owner` is
    /// `None`. Boundaries are left untouched.
    pub(crate) fn set_owner(&mut self, index: usize, owner: Option<String>) {
        self.blocks[index].owner = owner;
    }

    #[inline]
    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> Iter<'_> {
        self.blocks.iter()
    }

    /// Splits the free block at `index` so that it keeps exactly `size` KB and
    /// a new free block holding the remainder is inserted right after it.
    ///
    /// ```text
    /// +----------------------+        +---------+------------+
    /// |     free (size+r)    |  --->  | free(s) |  free (r)  |
    /// +----------------------+        +---------+------------+
    /// ```
    ///
    /// Nothing happens when the block is already exactly `size` KB long, a
    /// zero sized remainder is never produced. Returns whether a split took
    /// place.
    pub(crate) fn split(&mut self, index: usize, size: usize) -> bool {
        let block = &mut self.blocks[index];
        debug_assert!(block.is_free());
        debug_assert!(size > 0 && size <= block.size);

        if block.size == size {
            return false;
        }

        let remainder = Block::free(block.start + size, block.size - size);
        block.size = size;

        tracing::debug!(
            "split block at {}: {} KB + {} KB",
            block.start,
            size,
            remainder.size
        );

        self.blocks.insert(index + 1, remainder);
        true
    }

    /// Absorbs the block at `index + 1` into the block at `index`. Both blocks
    /// must be free.
    pub(crate) fn merge_next(&mut self, index: usize) {
        debug_assert!(self.blocks[index].is_free());
        debug_assert!(self.blocks[index + 1].is_free());

        let next = self.blocks.remove(index + 1);
        let block = &mut self.blocks[index];

        tracing::debug!(
            "merge block at {} ({} KB) with block at {} ({} KB)",
            block.start,
            block.size,
            next.start,
            next.size
        );

        block.size += next.size;
    }

    /// Verifies that the list is a valid partition of `[0, total)`.
    ///
    /// When `coalesced` is set, two adjacent free blocks are also reported as
    /// a violation.
    pub fn check(&self, total: usize, coalesced: bool) -> Result<()> {
        let Some(first) = self.blocks.first() else {
            return Err(Error::Corruption("block list is empty".into()));
        };

        if first.start != 0 {
            return Err(Error::Corruption(format!(
                "first block starts at {} instead of 0",
                first.start
            )));
        }

        let mut covered = 0;
        for (i, block) in self.blocks.iter().enumerate() {
            if block.size == 0 {
                return Err(Error::Corruption(format!(
                    "block {} at {} has zero size",
                    i, block.start
                )));
            }

            if block.start != covered {
                return Err(Error::Corruption(format!(
                    "block {} starts at {} but previous block ends at {}",
                    i,
                    block.start,
                    covered as isize - 1
                )));
            }

            if matches!(block.owner.as_deref(), Some("")) {
                return Err(Error::Corruption(format!(
                    "block {} at {} has an empty owner",
                    i, block.start
                )));
            }

            covered += block.size;
        }

        if covered != total {
            return Err(Error::Corruption(format!(
                "blocks cover {} KB, expected {} KB",
                covered, total
            )));
        }

        if coalesced {
            if let Some(pair) = self
                .blocks
                .windows(2)
                .find(|pair| pair[0].is_free() && pair[1].is_free())
            {
                return Err(Error::Corruption(format!(
                    "adjacent free blocks at {} and {}",
                    pair[0].start, pair[1].start
                )));
            }
        }

        Ok(())
    }
}

impl Index<usize> for BlockList {
    type Output = Block;

    fn index(&self, index: usize) -> &Self::Output {
        &self.blocks[index]
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
