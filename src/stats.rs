use crate::{freelist::FreeList, list::BlockList, utils::percent};

/// Aggregate figures describing a block list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total_memory: usize,
    pub allocated_memory: usize,
    pub free_memory: usize,
    /// Number of allocated blocks.
    pub num_processes: usize,
    pub num_free_blocks: usize,
    pub largest_free_block: usize,
    pub allocated_percent: f64,
    pub free_percent: f64,
    /// Share of free memory, in percent, that can't be handed out as one
    /// contiguous piece.
    pub external_fragmentation: f64,
}

impl Statistics {
    /// Computes the statistics of `blocks`. Does not modify anything, calling
    /// it twice on the same list gives the same result.
    pub fn compute(blocks: &BlockList, total_memory: usize) -> Self {
        let mut allocated_memory = 0;
        let mut free_memory = 0;
        let mut num_processes = 0;
        let mut num_free_blocks = 0;

        for block in blocks {
            if block.is_free() {
                free_memory += block.size;
                num_free_blocks += 1;
            } else {
                allocated_memory += block.size;
                num_processes += 1;
            }
        }

        let largest_free_block = FreeList::new(blocks).largest();

        Self {
            total_memory,
            allocated_memory,
            free_memory,
            num_processes,
            num_free_blocks,
            largest_free_block,
            allocated_percent: percent(allocated_memory, total_memory),
            free_percent: percent(free_memory, total_memory),
            external_fragmentation: percent(free_memory - largest_free_block, free_memory),
        }
    }
}
