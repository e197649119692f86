use crate::{block::Block, list::BlockList};

/// Read-only view over the free [`Block`]s of a [`BlockList`].
///
/// Free blocks are not kept in a separate structure, they are identified by
/// [`Block::is_free`] while walking the block list in address order:
///
/// ```text
///        first free                 next free
///            |                          |
/// +-------+--v---+-------+-------+------v-----+
/// |   A   | free |   B   |   C   |    free    |
/// +-------+------+-------+-------+------------+
/// ```
pub(crate) struct FreeList<'a> {
    blocks: &'a BlockList,
}

impl<'a> FreeList<'a> {
    pub fn new(blocks: &'a BlockList) -> Self {
        Self { blocks }
    }

    /// Free blocks along with their index in the block list, in ascending
    /// address order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a Block)> + 'a {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.is_free())
    }

    /// Returns the index of the block where `size` KB can be allocated.
    ///
    /// This is first-fit: the first free block in address order that is at
    /// least `size` KB long is chosen, even if a tighter one exists further
    /// up the address space.
    pub fn find_free_block(&self, size: usize) -> Option<usize> {
        self.iter()
            .find(|(_, block)| block.size >= size)
            .map(|(index, _)| index)
    }

    /// Size of the largest free block, 0 when everything is allocated.
    pub fn largest(&self) -> usize {
        self.iter().map(|(_, block)| block.size).max().unwrap_or(0)
    }
}
