//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! 1. Admit arrived processes into a FIFO ready queue (arrival order).
//! 2. If the queue is empty, jump the clock to the next arrival.
//! 3. Dequeue the head and run it for `min(quantum, remaining)` ticks.
//! 4. Admit processes that arrived during the slice, *then* re-queue the
//!    preempted process at the tail if it still has work left.
//!
//! Every slice is reported as its own Gantt entry; consecutive slices of
//! the same process are not merged.
//!
//! # Complexity
//! O(B / q + n) slices, where B = total burst time, q = quantum.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::{log_summary, SchedulingAlgorithm};
use crate::error::SchedulingError;
use crate::models::{
    arrival_sorted, MetricsCollector, Process, ProcessState, SchedulingResult, Timeline,
};
use crate::validation::{check_processes, validate_quantum};

/// Preemptive round robin policy with a fixed time quantum.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{RoundRobin, SchedulingAlgorithm};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let result = RoundRobin::new(2).schedule(&processes).unwrap();
/// assert_eq!(result.gantt_chart.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRobin {
    /// Maximum ticks granted per turn. Must be positive.
    pub quantum: i64,
}

impl RoundRobin {
    /// Creates a round robin policy. The quantum is checked when scheduling.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulingResult, SchedulingError> {
        validate_quantum(self.quantum)?;
        check_processes(processes)?;
        debug!(
            "RR: scheduling {} process(es), quantum={}",
            processes.len(),
            self.quantum
        );

        let mut states = arrival_sorted(processes);
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut timeline = Timeline::new();
        let mut metrics = MetricsCollector::new();
        let mut current_time = 0;
        let mut next_arrival = 0;

        while metrics.completed() < states.len() {
            admit_arrivals(&states, &mut next_arrival, current_time, &mut ready);

            let Some(idx) = ready.pop_front() else {
                match states.get(next_arrival) {
                    Some(next) => {
                        trace!("RR: idle {current_time}-{}", next.arrival_time());
                        current_time = next.arrival_time();
                        continue;
                    }
                    None => break,
                }
            };

            let start = current_time;
            current_time += states[idx].execute(self.quantum);
            trace!("RR: {} runs {start}-{current_time}", states[idx].id());
            timeline.push(states[idx].id(), start, current_time);

            // Arrivals during the slice queue ahead of the preempted process
            admit_arrivals(&states, &mut next_arrival, current_time, &mut ready);

            if states[idx].is_complete() {
                metrics.record(states[idx].process(), current_time);
            } else {
                ready.push_back(idx);
            }
        }

        let result = metrics.finish(timeline);
        log_summary(self.name(), &result);
        Ok(result)
    }
}

/// Enqueues every not-yet-admitted process that has arrived by `now`.
///
/// `states` must be arrival-sorted; `cursor` marks the first process not
/// yet admitted.
fn admit_arrivals(
    states: &[ProcessState],
    cursor: &mut usize,
    now: i64,
    ready: &mut VecDeque<usize>,
) {
    while *cursor < states.len() && states[*cursor].has_arrived(now) {
        ready.push_back(*cursor);
        *cursor += 1;
    }
}
