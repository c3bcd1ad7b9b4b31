//! CPU scheduling policies and KPI evaluation.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | `Fcfs` | no | earliest arrival |
//! | `Sjf` | no | shortest burst among arrived |
//! | `Srt` | yes, per tick | shortest remaining among arrived |
//! | `RoundRobin` | yes, per quantum | FIFO ready queue |
//!
//! Every policy clones its input, so the caller's process list is never
//! modified and repeated runs over the same input give equal results.
//!
//! # KPI
//!
//! `ScheduleKpi` derives makespan, utilization, context switches and
//! response time from a finished run.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod round_robin;
mod sjf;
mod srt;

pub use fcfs::Fcfs;
pub use kpi::ScheduleKpi;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srt::Srt;

use std::fmt::Debug;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SchedulingError;
use crate::models::{Process, SchedulingResult};

/// A CPU scheduling policy.
///
/// Implementations are stateless apart from configuration (the round robin
/// quantum), so one value can serve any number of runs.
pub trait SchedulingAlgorithm: Send + Sync + Debug {
    /// Short policy label (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates the policy over `processes`.
    ///
    /// # Errors
    /// - `InvalidProcess` if any process fails validation.
    /// - `InvalidConfiguration` if the policy itself is misconfigured.
    fn schedule(&self, processes: &[Process]) -> Result<SchedulingResult, SchedulingError>;
}

/// Policy selector.
///
/// Serialized with a `policy` tag:
/// `{"policy": "fcfs"}` or `{"policy": "round_robin", "quantum": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-come, first-served.
    Fcfs,
    /// Non-preemptive shortest job first.
    Sjf,
    /// Preemptive shortest remaining time.
    Srt,
    /// Round robin with a fixed quantum.
    RoundRobin {
        /// Maximum ticks per turn.
        quantum: i64,
    },
}

impl Algorithm {
    /// Every policy, with round robin using the given quantum.
    pub fn all(quantum: i64) -> [Algorithm; 4] {
        [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Srt,
            Algorithm::RoundRobin { quantum },
        ]
    }
}

impl SchedulingAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => Fcfs.name(),
            Algorithm::Sjf => Sjf.name(),
            Algorithm::Srt => Srt.name(),
            Algorithm::RoundRobin { quantum } => RoundRobin::new(*quantum).name(),
        }
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulingResult, SchedulingError> {
        match self {
            Algorithm::Fcfs => Fcfs.schedule(processes),
            Algorithm::Sjf => Sjf.schedule(processes),
            Algorithm::Srt => Srt.schedule(processes),
            Algorithm::RoundRobin { quantum } => RoundRobin::new(*quantum).schedule(processes),
        }
    }
}

/// Input container for a scheduling run.
///
/// Deserializable, so a run can be described in JSON:
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{Algorithm, ScheduleRequest};
///
/// let request = ScheduleRequest::new(Algorithm::RoundRobin { quantum: 2 })
///     .with_process(Process::new("P1", 0, 5))
///     .with_process(Process::new("P2", 1, 3));
///
/// let result = request.run().unwrap();
/// assert_eq!(result.completion_time("P1"), Some(8));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Policy to simulate.
    pub algorithm: Algorithm,
    /// Processes to schedule.
    #[serde(default)]
    pub processes: Vec<Process>,
}

impl ScheduleRequest {
    /// Creates an empty request for the given policy.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            processes: Vec::new(),
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Replaces the process list.
    pub fn with_processes(mut self, processes: Vec<Process>) -> Self {
        self.processes = processes;
        self
    }

    /// Switches the policy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Runs the selected policy over the request's processes.
    pub fn run(&self) -> Result<SchedulingResult, SchedulingError> {
        self.algorithm.schedule(&self.processes)
    }
}

fn log_summary(policy: &str, result: &SchedulingResult) {
    debug!(
        "{policy}: {} process(es), {} slice(s), avg waiting={:.2}, avg turnaround={:.2}",
        result.process_count(),
        result.gantt_chart.len(),
        result.average_waiting_time,
        result.average_turnaround_time
    );
}
