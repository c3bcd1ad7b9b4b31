//! Process model.
//!
//! A process is a unit of CPU work characterized by when it becomes
//! schedulable (arrival) and how much CPU time it needs (burst).
//!
//! `Process` is the caller-owned, immutable input record. Each simulation
//! run works on private `ProcessState` copies so that repeated or concurrent
//! runs over the same input never observe each other's mutations.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks relative to a simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g., "P1").
    pub id: String,
    /// Tick at which the process becomes schedulable.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }
}

/// Mutable per-run simulation state of a process.
///
/// Owns a clone of the input `Process`; the caller's record is never touched.
///
/// # Invariant
/// `0 <= remaining_time <= burst_time`, and `remaining_time == 0` exactly
/// when the process has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessState {
    process: Process,
    remaining_time: i64,
}

impl ProcessState {
    /// Creates a fresh state with the full burst remaining.
    pub fn new(process: &Process) -> Self {
        Self {
            process: process.clone(),
            remaining_time: process.burst_time,
        }
    }

    /// The underlying input record.
    #[inline]
    pub fn process(&self) -> &Process {
        &self.process
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }

    /// Arrival tick.
    #[inline]
    pub fn arrival_time(&self) -> i64 {
        self.process.arrival_time
    }

    /// Total CPU time required.
    #[inline]
    pub fn burst_time(&self) -> i64 {
        self.process.burst_time
    }

    /// CPU time still owed to this process.
    #[inline]
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.process.arrival_time <= time
    }

    /// Whether all CPU time has been delivered.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Runs the process for up to `ticks` time units.
    ///
    /// Returns the number of ticks actually consumed, which is less than
    /// `ticks` only when the process finishes early.
    pub fn execute(&mut self, ticks: i64) -> i64 {
        let used = ticks.clamp(0, self.remaining_time);
        self.remaining_time -= used;
        used
    }
}

/// Clones the input into run states, stably sorted by arrival time.
///
/// Processes arriving at the same tick keep their input order; that order
/// is the default tie-break precedence for every policy.
pub fn arrival_sorted(processes: &[Process]) -> Vec<ProcessState> {
    let mut states: Vec<ProcessState> = processes.iter().map(ProcessState::new).collect();
    states.sort_by_key(|s| s.arrival_time());
    states
}
