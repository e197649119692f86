use crate::{
    allocator::FirstFit,
    error::{Error, Result},
};

/// What happens to neighbouring free blocks when a block is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coalesce {
    /// Released blocks keep their boundaries. Adjacent free blocks may
    /// coexist and count as separate pieces in the statistics.
    #[default]
    Never,
    /// A released block is merged with a free predecessor and a free
    /// successor, so no two adjacent blocks are ever both free.
    Adjacent,
}

#[derive(Debug, Clone)]
pub struct SimOptions {
    total_memory: usize,

    coalesce: Coalesce,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            total_memory: 1024,
            coalesce: Coalesce::Never,
        }
    }
}

impl SimOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the simulated address space in KB
    pub fn total_memory(&mut self, size: usize) -> &mut Self {
        self.total_memory = size;
        self
    }

    /// Coalescing policy applied on release
    pub fn coalesce(&mut self, coalesce: Coalesce) -> &mut Self {
        self.coalesce = coalesce;
        self
    }

    pub fn build(&self) -> Result<FirstFit> {
        if self.total_memory == 0 {
            return Err(Error::InvalidCapacity(0));
        }

        Ok(FirstFit::with_coalesce(self.total_memory, self.coalesce))
    }
}
