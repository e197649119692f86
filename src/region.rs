use crate::list::BlockList;

/// The simulated address space: its capacity and the [`BlockList`]
/// partitioning it.
///
/// ```text
/// +------------------------------------------------+
/// |        | +-------+    +-------+    +-------+   |
/// | Region | | Block | -> | Block | -> | Block |   |
/// |        | +-------+    +-------+    +-------+   |
/// +------------------------------------------------+
/// ```
#[derive(Debug, Clone)]
pub struct Region {
    /// Size of the region in KB.
    pub size: usize,
    /// Blocks of the region, in address order.
    pub blocks: BlockList,
}

impl Region {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            blocks: BlockList::new(size),
        }
    }

    /// Tries to merge the block at `index` with the previous one. This can be
    /// performed if both blocks are free.
    ///
    /// Returns the index the merged block ends up at.
    pub(crate) fn merge_with_prev(&mut self, index: usize) -> usize {
        if index == 0 {
            return index;
        }

        let prev_free = self.blocks.get(index - 1).is_some_and(|b| b.is_free());
        let free = self.blocks.get(index).is_some_and(|b| b.is_free());

        if prev_free && free {
            // The previous block grows over this one.
            self.blocks.merge_next(index - 1);
            return index - 1;
        }

        index
    }

    /// Tries to merge the block at `index` with the next one. This can be
    /// performed if both blocks are free.
    pub(crate) fn merge_with_next(&mut self, index: usize) {
        let free = self.blocks.get(index).is_some_and(|b| b.is_free());
        let next_free = self.blocks.get(index + 1).is_some_and(|b| b.is_free());

        if free && next_free {
            self.blocks.merge_next(index);
        }
    }
}
