#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid capacity: total memory must be positive, got {0}")]
    InvalidCapacity(i64),

    #[error("invalid size: {name} requested {size} KB")]
    InvalidSize { name: String, size: i64 },

    #[error("insufficient memory: {name} requested {size} KB, largest free block is {largest_free} KB")]
    InsufficientMemory {
        name: String,
        size: usize,
        largest_free: usize,
    },

    #[error("process not found: {0}")]
    ProcessNotFound(String),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Corruption: {0}")]
    Corruption(String),
}

impl Error {
    /// Whether the error ends the run. Allocation and release failures are
    /// per-request outcomes and never abort a simulation.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::InvalidSize { .. }
                | Error::InsufficientMemory { .. }
                | Error::ProcessNotFound(_)
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failures_are_not_fatal() {
        let insufficient = Error::InsufficientMemory {
            name: "A".into(),
            size: 10,
            largest_free: 5,
        };
        assert!(!insufficient.is_fatal());
        assert!(!Error::ProcessNotFound("A".into()).is_fatal());
        assert!(
            !Error::InvalidSize {
                name: "A".into(),
                size: 0
            }
            .is_fatal()
        );

        assert!(Error::InvalidCapacity(0).is_fatal());
        assert!(
            Error::Parse {
                line: 3,
                reason: "unknown command".into()
            }
            .is_fatal()
        );
    }
}
