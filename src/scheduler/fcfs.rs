//! First-Come, First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time (stable).
//! 2. Run each to completion in that order.
//! 3. If the CPU is idle before the next arrival, jump the clock to it.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the simulation.

use log::{debug, trace};

use super::{log_summary, SchedulingAlgorithm};
use crate::error::SchedulingError;
use crate::models::{arrival_sorted, MetricsCollector, Process, SchedulingResult, Timeline};
use crate::validation::check_processes;

/// Non-preemptive first-come, first-served policy.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{Fcfs, SchedulingAlgorithm};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let result = Fcfs.schedule(&processes).unwrap();
/// assert_eq!(result.waiting_time("P2"), Some(4));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulingResult, SchedulingError> {
        check_processes(processes)?;
        debug!("FCFS: scheduling {} process(es)", processes.len());

        let mut timeline = Timeline::new();
        let mut metrics = MetricsCollector::new();
        let mut current_time = 0;

        for state in arrival_sorted(processes) {
            let start = current_time.max(state.arrival_time());
            let end = start + state.burst_time();
            trace!("FCFS: {} runs {start}-{end}", state.id());

            timeline.push(state.id(), start, end);
            metrics.record(state.process(), end);
            current_time = end;
        }

        let result = metrics.finish(timeline);
        log_summary(self.name(), &result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttChartEntry;

    #[test]
    fn test_fcfs_textbook_example() {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let result = Fcfs.schedule(&processes).unwrap();

        assert_eq!(
            result.gantt_chart,
            vec![
                GanttChartEntry::new("P1", 0, 5),
                GanttChartEntry::new("P2", 5, 8),
                GanttChartEntry::new("P3", 8, 16),
            ]
        );
        assert_eq!(result.waiting_time("P1"), Some(0));
        assert_eq!(result.waiting_time("P2"), Some(4));
        assert_eq!(result.waiting_time("P3"), Some(6));
        assert_eq!(result.turnaround_time("P3"), Some(14));
        assert!((result.average_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((result.average_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 5, 3)];
        let result = Fcfs.schedule(&processes).unwrap();

        assert_eq!(result.gantt_chart[1], GanttChartEntry::new("P2", 5, 8));
        assert_eq!(result.waiting_time("P2"), Some(0));
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let processes = vec![Process::new("late", 4, 1), Process::new("early", 0, 2)];
        let result = Fcfs.schedule(&processes).unwrap();
        assert_eq!(result.gantt_chart[0].process_id, "early");
        assert_eq!(result.gantt_chart[1], GanttChartEntry::new("late", 4, 5));
    }

    #[test]
    fn test_fcfs_same_arrival_keeps_input_order() {
        let processes = vec![Process::new("B", 0, 3), Process::new("A", 0, 1)];
        let result = Fcfs.schedule(&processes).unwrap();
        assert_eq!(result.gantt_chart[0].process_id, "B");
        assert_eq!(result.waiting_time("A"), Some(3));
    }

    #[test]
    fn test_fcfs_empty_input() {
        let result = Fcfs.schedule(&[]).unwrap();
        assert!(result.gantt_chart.is_empty());
        assert!((result.average_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_rejects_invalid_process() {
        let err = Fcfs.schedule(&[Process::new("P1", 0, 0)]).unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidProcess(_)));
    }
}
