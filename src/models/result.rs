//! Scheduling result and per-process metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Average waiting | mean waiting over all processes |
//! | Average turnaround | mean turnaround over all processes |
//!
//! An empty run reports both averages as `0.0`.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{GanttChartEntry, Process, Timeline};

/// Outcome of one scheduling run.
///
/// Per-process maps are keyed by process ID. `BTreeMap` keeps iteration
/// and serialized output deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Execution timeline in time order.
    pub gantt_chart: Vec<GanttChartEntry>,
    /// Waiting time per process.
    pub waiting_times: BTreeMap<String, i64>,
    /// Turnaround time per process.
    pub turnaround_times: BTreeMap<String, i64>,
    /// Completion tick per process.
    pub completion_times: BTreeMap<String, i64>,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
}

impl SchedulingResult {
    /// Waiting time of a process, if it was scheduled.
    pub fn waiting_time(&self, process_id: &str) -> Option<i64> {
        self.waiting_times.get(process_id).copied()
    }

    /// Turnaround time of a process, if it was scheduled.
    pub fn turnaround_time(&self, process_id: &str) -> Option<i64> {
        self.turnaround_times.get(process_id).copied()
    }

    /// Completion tick of a process, if it was scheduled.
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.completion_times.get(process_id).copied()
    }

    /// Number of processes covered by this result.
    pub fn process_count(&self) -> usize {
        self.completion_times.len()
    }

    /// End of the last Gantt entry (0 when nothing ran).
    pub fn makespan(&self) -> i64 {
        self.gantt_chart.last().map(|e| e.end_time).unwrap_or(0)
    }

    /// Total CPU time across all Gantt entries.
    pub fn busy_time(&self) -> i64 {
        self.gantt_chart.iter().map(|e| e.duration()).sum()
    }

    /// First dispatch tick of a process.
    pub fn first_start_time(&self, process_id: &str) -> Option<i64> {
        self.gantt_chart
            .iter()
            .find(|e| e.process_id == process_id)
            .map(|e| e.start_time)
    }
}

/// Accumulates completions during a run and derives the metrics.
///
/// Totals are kept in `i128`: each turnaround fits in `i64` once the input
/// passes validation, but their sum over many processes may not.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    waiting_times: BTreeMap<String, i64>,
    turnaround_times: BTreeMap<String, i64>,
    completion_times: BTreeMap<String, i64>,
    total_waiting: i128,
    total_turnaround: i128,
}

impl MetricsCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `process` finished at `completion_time`.
    pub fn record(&mut self, process: &Process, completion_time: i64) {
        let turnaround = completion_time - process.arrival_time;
        let waiting = turnaround - process.burst_time;

        self.total_turnaround += i128::from(turnaround);
        self.total_waiting += i128::from(waiting);
        self.completion_times
            .insert(process.id.clone(), completion_time);
        self.turnaround_times.insert(process.id.clone(), turnaround);
        self.waiting_times.insert(process.id.clone(), waiting);
    }

    /// Number of completions recorded so far.
    pub fn completed(&self) -> usize {
        self.completion_times.len()
    }

    /// Finalizes the result with the given timeline.
    pub fn finish(self, timeline: Timeline) -> SchedulingResult {
        let count = self.completion_times.len();
        let (average_waiting_time, average_turnaround_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                self.total_waiting as f64 / count as f64,
                self.total_turnaround as f64 / count as f64,
            )
        };

        SchedulingResult {
            gantt_chart: timeline.into_entries(),
            waiting_times: self.waiting_times,
            turnaround_times: self.turnaround_times,
            completion_times: self.completion_times,
            average_waiting_time,
            average_turnaround_time,
        }
    }
}
