//! First-fit memory allocation simulator.
//!
//! A single contiguous address space of `total_memory` KB is partitioned into
//! [`Block`]s. Allocation requests take the first free block large enough
//! (splitting it when needed), release requests free the first block owned by
//! the given name. At the end of a run the block layout and fragmentation
//! statistics can be rendered with [`Report`].
//!
//! ```
//! use ffsim::{Coalesce, Script, Simulation};
//!
//! let script = Script::parse("100\nREQUEST A 30\nREQUEST B 40\nRELEASE A\nREQUEST C 20\n")?;
//! let sim = Simulation::run(script, Coalesce::Never)?;
//!
//! assert_eq!(sim.allocator().blocks().len(), 4);
//! assert_eq!(sim.allocator().successful_allocations(), 3);
//! # Ok::<(), ffsim::Error>(())
//! ```

mod allocator;
mod block;
mod error;
mod freelist;
mod list;
mod options;
mod region;
mod report;
mod request;
mod simulation;
mod stats;
mod utils;

pub use allocator::{FirstFit, Outcome};
pub use block::Block;
pub use error::{Error, Result};
pub use list::BlockList;
pub use options::{Coalesce, SimOptions};
pub use report::{FinalState, Report};
pub use request::{Request, Script};
pub use simulation::Simulation;
pub use stats::Statistics;
