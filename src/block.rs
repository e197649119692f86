/// A contiguous run of the simulated address space.
///
/// Blocks carry no payload, they only describe which part of the address
/// space they cover and who owns it. The following diagram shows a block
/// of 30 KB owned by `A` starting at offset 20:
///
/// ```text
/// 20                       49
/// +-------------------------+
/// |  owner: A   size: 30    |
/// +-------------------------+
///  start                 end
/// ```
///
/// A block with no owner is free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// First offset covered by the block.
    pub start: usize,
    /// Length of the block in KB. Never zero.
    pub size: usize,
    /// Name of the process holding the block, `None` if the block is free.
    pub owner: Option<String>,
}

impl Block {
    pub fn free(start: usize, size: usize) -> Self {
        Self {
            start,
            size,
            owner: None,
        }
    }

    pub fn allocated(start: usize, size: usize, owner: impl Into<String>) -> Self {
        Self {
            start,
            size,
            owner: Some(owner.into()),
        }
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }

    /// Last offset covered by the block (inclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.size - 1
    }

    /// Whether this block is allocated to `name`.
    #[inline]
    pub fn is_owned_by(&self, name: &str) -> bool {
        self.owner.as_deref() == Some(name)
    }
}
