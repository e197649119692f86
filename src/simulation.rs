use crate::{
    allocator::{FirstFit, Outcome},
    error::Result,
    options::{Coalesce, SimOptions},
    request::Script,
};

/// A finished run: the allocator in its final state and the outcome of every
/// request, in the order the requests were applied.
#[derive(Debug)]
pub struct Simulation {
    allocator: FirstFit,
    outcomes: Vec<Outcome>,
}

impl Simulation {
    /// Replays `script` against a fresh allocator.
    ///
    /// Only an invalid capacity can fail here, allocation and release
    /// failures end up in the outcomes.
    pub fn run(script: Script, coalesce: Coalesce) -> Result<Self> {
        let mut allocator = SimOptions::new()
            .total_memory(script.total_memory)
            .coalesce(coalesce)
            .build()?;

        tracing::info!(
            "start simulation: {} KB, {} requests, coalesce {:?}",
            script.total_memory,
            script.requests.len(),
            coalesce
        );

        let outcomes = script
            .requests
            .into_iter()
            .map(|request| allocator.apply(request))
            .collect();

        tracing::info!(
            "simulation done: {} successful, {} failed allocations",
            allocator.successful_allocations(),
            allocator.failed_allocations()
        );

        Ok(Self {
            allocator,
            outcomes,
        })
    }

    pub fn allocator(&self) -> &FirstFit {
        &self.allocator
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}
