//! Text rendering of a finished [`Simulation`].
//!
//! The layout follows the classic lab output:
//!
//! ```text
//! Block 1: [0-19]        C (20 KB) - ALLOCATED
//! Block 2: [20-29]        FREE (10 KB)
//! ```

use std::fmt;

use crate::{allocator::FirstFit, simulation::Simulation, stats::Statistics};

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

/// Full report of a run read from `source`.
pub struct Report<'a> {
    source: &'a str,
    simulation: &'a Simulation,
}

impl<'a> Report<'a> {
    pub fn new(source: &'a str, simulation: &'a Simulation) -> Self {
        Self { source, simulation }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let allocator = self.simulation.allocator();

        writeln!(f, "{}", RULE)?;
        writeln!(f, "Memory Allocation Simulator (First-Fit)")?;
        writeln!(f, "{}\n", RULE)?;
        writeln!(f, "Reading from: {}", self.source)?;
        writeln!(f, "Total Memory: {} KB", allocator.total_memory())?;
        writeln!(f, "{}", THIN_RULE)?;
        writeln!(f, "\nProcessing requests...\n")?;

        for outcome in self.simulation.outcomes() {
            writeln!(f, "{}", outcome)?;
        }

        write!(f, "{}", FinalState(allocator))
    }
}

/// Final block layout followed by the statistics and counters.
pub struct FinalState<'a>(pub &'a FirstFit);

impl fmt::Display for FinalState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let allocator = self.0;

        writeln!(f, "\n{}", RULE)?;
        writeln!(f, "Final Memory State")?;
        writeln!(f, "{}", RULE)?;

        for (i, block) in allocator.blocks().iter().enumerate() {
            let end = block.end();
            let pad = 10usize.saturating_sub(end.to_string().len()).max(1);

            write!(
                f,
                "Block {}: [{}-{}]{:pad$}{} ({} KB)",
                i + 1,
                block.start,
                end,
                "",
                block.owner.as_deref().unwrap_or("FREE"),
                block.size,
                pad = pad
            )?;

            if block.is_free() {
                writeln!(f)?;
            } else {
                writeln!(f, " - ALLOCATED")?;
            }
        }

        writeln!(f, "\n{}", RULE)?;
        writeln!(f, "Memory Statistics")?;
        writeln!(f, "{}", RULE)?;
        write!(f, "{}", allocator.statistics())?;

        writeln!(
            f,
            "\nSuccessful Allocations: {}",
            allocator.successful_allocations()
        )?;
        writeln!(
            f,
            "Failed Allocations:     {}",
            allocator.failed_allocations()
        )?;
        writeln!(f, "{}", RULE)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Memory:           {} KB", self.total_memory)?;
        writeln!(
            f,
            "Allocated Memory:       {} KB ({:.2}%)",
            self.allocated_memory, self.allocated_percent
        )?;
        writeln!(
            f,
            "Free Memory:            {} KB ({:.2}%)",
            self.free_memory, self.free_percent
        )?;
        writeln!(f, "Number of Processes:    {}", self.num_processes)?;
        writeln!(f, "Number of Free Blocks:  {}", self.num_free_blocks)?;
        writeln!(f, "Largest Free Block:     {} KB", self.largest_free_block)?;
        writeln!(
            f,
            "External Fragmentation: {:.2}%",
            self.external_fragmentation
        )
    }
}
