//! Dispatching rules for choosing the next process to run.
//!
//! A rule scores each ready process; the scheduler runs the process with
//! the lowest score. Ties go to the candidate that comes first in the
//! slice, which for every policy in this crate is arrival order.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_best};
//! use u_cpusched::models::{arrival_sorted, Process};
//!
//! let ready = arrival_sorted(&[Process::new("P1", 0, 7), Process::new("P2", 0, 3)]);
//! assert_eq!(select_best(&rules::ShortestBurst, &ready, |_| true), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;

use crate::models::ProcessState;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that scores ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "SRPT").
    fn name(&self) -> &'static str;

    /// Scores a ready process. Lower = dispatched first.
    fn evaluate(&self, process: &ProcessState) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Returns the index of the best-scoring candidate.
///
/// Only processes for which `eligible` holds are considered. Among equal
/// scores the lowest index wins, so the result is reproducible for a given
/// candidate order.
pub fn select_best<R, F>(rule: &R, candidates: &[ProcessState], eligible: F) -> Option<usize>
where
    R: DispatchingRule + ?Sized,
    F: Fn(&ProcessState) -> bool,
{
    let mut best: Option<(usize, RuleScore)> = None;
    for (idx, process) in candidates.iter().enumerate() {
        if !eligible(process) {
            continue;
        }
        let score = rule.evaluate(process);
        // Strict comparison keeps the earliest candidate on ties
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((idx, score));
        }
    }
    best.map(|(idx, _)| idx)
}
