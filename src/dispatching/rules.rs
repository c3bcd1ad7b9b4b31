//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.

use super::{DispatchingRule, RuleScore};
use crate::models::ProcessState;

/// Shortest Processing Time (total burst).
///
/// Drives non-preemptive SJF. Minimizes mean waiting time when all
/// processes are available together.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &ProcessState) -> RuleScore {
        process.burst_time()
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Shortest Remaining Processing Time.
///
/// Drives preemptive SRT: re-evaluated every tick against the CPU time
/// each process still needs.
///
/// # Reference
/// Schrage (1968), optimal for minimizing mean flow time with preemption.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn evaluate(&self, process: &ProcessState) -> RuleScore {
        process.remaining_time()
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Processing Time"
    }
}
