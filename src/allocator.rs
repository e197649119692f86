use std::fmt;

use crate::{
    block::Block,
    error::{Error, Result},
    freelist::FreeList,
    list::BlockList,
    options::Coalesce,
    region::Region,
    request::Request,
    stats::Statistics,
};

/// First-fit allocator over a single simulated [`Region`].
///
/// This is the whole state of a simulation run: the region with its blocks,
/// the coalescing policy and the allocation counters. Every operation takes
/// `&mut self`, requests are applied one at a time in the order they are
/// received.
#[derive(Debug, Clone)]
pub struct FirstFit {
    region: Region,
    coalesce: Coalesce,
    successful_allocations: usize,
    failed_allocations: usize,
}

impl FirstFit {
    /// Creates an allocator managing `total_memory` KB, all of it free,
    /// without coalescing on release.
    pub fn new(total_memory: usize) -> Result<Self> {
        if total_memory == 0 {
            return Err(Error::InvalidCapacity(0));
        }

        Ok(Self::with_coalesce(total_memory, Coalesce::Never))
    }

    pub(crate) fn with_coalesce(total_memory: usize, coalesce: Coalesce) -> Self {
        debug_assert!(total_memory > 0);

        Self {
            region: Region::new(total_memory),
            coalesce,
            successful_allocations: 0,
            failed_allocations: 0,
        }
    }

    #[inline]
    pub fn total_memory(&self) -> usize {
        self.region.size
    }

    #[inline]
    pub fn coalesce(&self) -> Coalesce {
        self.coalesce
    }

    #[inline]
    pub fn blocks(&self) -> &BlockList {
        &self.region.blocks
    }

    #[inline]
    pub fn successful_allocations(&self) -> usize {
        self.successful_allocations
    }

    #[inline]
    pub fn failed_allocations(&self) -> usize {
        self.failed_allocations
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::compute(&self.region.blocks, self.region.size)
    }

    /// Allocates `size` KB to `name` and returns the start of the allocated
    /// block.
    ///
    /// The first free block in address order that can hold `size` is used.
    /// If it is larger than needed it is split and the remainder stays free
    /// right after the allocated part. Names don't have to be unique, every
    /// call creates an independent block.
    pub fn allocate(&mut self, name: &str, size: usize) -> Result<usize> {
        if size == 0 {
            return Err(Error::InvalidSize {
                name: name.to_string(),
                size: 0,
            });
        }

        let Some(index) = FreeList::new(&self.region.blocks).find_free_block(size) else {
            self.failed_allocations += 1;

            let largest_free = FreeList::new(&self.region.blocks).largest();
            tracing::debug!(
                "cannot allocate {} KB to {}, largest free block is {} KB",
                size,
                name,
                largest_free
            );

            return Err(Error::InsufficientMemory {
                name: name.to_string(),
                size,
                largest_free,
            });
        };

        self.region.blocks.split(index, size);
        self.region.blocks.set_owner(index, Some(name.to_string()));
        let start = self.region.blocks[index].start;

        self.successful_allocations += 1;
        tracing::debug!("allocated {} KB to {} at {}", size, name, start);

        self.debug_check();
        Ok(start)
    }

    /// Releases the first block in address order owned by `name` and returns
    /// the released block as it was before any coalescing.
    pub fn release(&mut self, name: &str) -> Result<Block> {
        let Some(index) = self
            .region
            .blocks
            .iter()
            .position(|block| block.is_owned_by(name))
        else {
            tracing::debug!("cannot release {}, no block owned by it", name);
            return Err(Error::ProcessNotFound(name.to_string()));
        };

        let released = self.region.blocks[index].clone();
        self.region.blocks.set_owner(index, None);

        tracing::debug!(
            "released {} KB at {} from {}",
            released.size,
            released.start,
            name
        );

        if self.coalesce == Coalesce::Adjacent {
            let index = self.region.merge_with_prev(index);
            self.region.merge_with_next(index);
        }

        self.debug_check();
        Ok(released)
    }

    /// Applies a single request and records its outcome. Failures are part of
    /// the outcome, they never stop the caller from applying the next request.
    pub fn apply(&mut self, request: Request) -> Outcome {
        let result = match &request {
            Request::Allocate { name, size } => self.allocate(name, *size).map(|_| ()),
            Request::Release { name } => self.release(name).map(|_| ()),
        };

        Outcome {
            request,
            error: result.err(),
        }
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            if let Err(err) = self
                .region
                .blocks
                .check(self.region.size, self.coalesce == Coalesce::Adjacent)
            {
                panic!("{}", err);
            }
        }
    }
}

/// Result of applying one [`Request`].
#[derive(Debug)]
pub struct Outcome {
    pub request: Request,
    /// Why the request failed, `None` on success.
    pub error: Option<Error>,
}

impl Outcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match &self.error {
            None => "SUCCESS",
            Some(Error::InsufficientMemory { .. }) => "FAIL (insufficient memory)",
            Some(Error::ProcessNotFound(_)) => "FAIL (process not found)",
            Some(Error::InvalidSize { .. }) => "FAIL (invalid size)",
            Some(_) => "FAIL",
        };

        write!(f, "{} → {}", self.request, status)
    }
}
