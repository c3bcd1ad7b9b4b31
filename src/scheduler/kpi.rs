//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a finished run and
//! its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last Gantt entry |
//! | Busy time | Sum of Gantt entry durations |
//! | Idle time | Makespan - busy time |
//! | CPU utilization | Busy time / makespan |
//! | Context switches | Adjacent entries that change process |
//! | Avg response time | Mean(first dispatch - arrival) |
//! | Throughput | Completed processes per time unit of makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{Process, SchedulingResult};

/// CPU schedule performance indicators.
///
/// All time values are in simulation ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Ticks spent executing processes.
    pub busy_time: i64,
    /// Ticks in `[0, makespan)` with nothing to run.
    pub idle_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
    /// Mean time from arrival to first dispatch.
    pub avg_response_time: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a result and its input processes.
    ///
    /// # Arguments
    /// * `result` - A finished scheduling run.
    /// * `processes` - The input processes (for arrival times).
    pub fn calculate(result: &SchedulingResult, processes: &[Process]) -> Self {
        let makespan = result.makespan();
        let busy_time = result.busy_time();

        let context_switches = result
            .gantt_chart
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count();

        let mut total_response: i128 = 0;
        let mut counted: usize = 0;
        for p in processes {
            if let Some(first_start) = result.first_start_time(&p.id) {
                total_response += i128::from(first_start - p.arrival_time);
                counted += 1;
            }
        }

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                result.process_count() as f64 / makespan as f64,
            )
        };

        let avg_response_time = if counted == 0 {
            0.0
        } else {
            total_response as f64 / counted as f64
        };

        Self {
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            context_switches,
            avg_response_time,
            throughput,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_response_time: f64, min_utilization: f64) -> bool {
        self.avg_response_time <= max_response_time && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Fcfs, RoundRobin, SchedulingAlgorithm, Srt};

    fn textbook_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ]
    }

    #[test]
    fn test_kpi_fcfs() {
        let processes = textbook_processes();
        let result = Fcfs.schedule(&processes).unwrap();
        let kpi = ScheduleKpi::calculate(&result, &processes);

        assert_eq!(kpi.makespan, 16);
        assert_eq!(kpi.busy_time, 16);
        assert_eq!(kpi.idle_time, 0);
        assert_eq!(kpi.context_switches, 2);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        // Non-preemptive: response time equals waiting time
        assert!((kpi.avg_response_time - result.average_waiting_time).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_time() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 6, 2)];
        let result = Fcfs.schedule(&processes).unwrap();
        let kpi = ScheduleKpi::calculate(&result, &processes);

        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.idle_time, 4);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_round_robin_response() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let result = RoundRobin::new(2).schedule(&processes).unwrap();
        let kpi = ScheduleKpi::calculate(&result, &processes);

        // P1 at 0 (response 0), P2 first runs at 2 (response 1)
        assert!((kpi.avg_response_time - 0.5).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 4);
    }

    #[test]
    fn test_kpi_same_process_slices_not_a_switch() {
        let processes = vec![Process::new("P1", 0, 6)];
        let result = RoundRobin::new(2).schedule(&processes).unwrap();
        let kpi = ScheduleKpi::calculate(&result, &processes);
        assert_eq!(result.gantt_chart.len(), 3);
        assert_eq!(kpi.context_switches, 0);
    }

    #[test]
    fn test_kpi_srt_preemption_counts() {
        let processes = vec![Process::new("P1", 0, 8), Process::new("P2", 1, 2)];
        let result = Srt.schedule(&processes).unwrap();
        let kpi = ScheduleKpi::calculate(&result, &processes);
        // P1 -> P2 -> P1
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&SchedulingResult::default(), &[]);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.avg_response_time - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 6, 2)];
        let result = Fcfs.schedule(&processes).unwrap();
        let kpi = ScheduleKpi::calculate(&result, &processes);

        assert!(kpi.meets_thresholds(0.0, 0.5));
        assert!(!kpi.meets_thresholds(0.0, 0.6)); // Utilization too low
    }
}
