//! Per-generation counters for the simulation loop.
//!
//! [`StepMetrics`] is returned by every [`Simulator::step`](crate::Simulator::step)
//! and the most recent one is kept on the simulator for later inspection.

/// What happened during a single generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Generation number reached by this step.
    pub generation: u64,
    /// Ants in the registry after the step.
    pub ants: usize,
    /// Ants appended by marker promotion this step.
    pub spawned: usize,
    /// Cells the rule flipped from empty to an ordinary trail level.
    pub flipped_to_trail: usize,
    /// Cells the rule flipped from coloured to empty.
    pub flipped_to_empty: usize,
    /// Wall-clock time for the whole step, in microseconds.
    pub total_us: u64,
}
