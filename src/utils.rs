//! Helper functions that don't particularly belong to any concrete module of
//! the simulator.

/// Returns `part` as a percentage of `whole`, or 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    part as f64 * 100.0 / whole as f64
}
