//! Preemptive Shortest-Remaining-Time scheduling.
//!
//! # Algorithm
//!
//! Tick-driven simulation with one time unit granularity:
//!
//! 1. Among arrived, unfinished processes pick the one with the least
//!    remaining time. The first in arrival order wins ties.
//! 2. If the pick differs from the running process, close the running
//!    slice at the current tick and open a new one.
//! 3. Execute the pick for one tick. On completion close its slice.
//! 4. When nothing is ready, jump the clock to the next arrival.
//!
//! Raw slices are coalesced once the simulation ends.
//!
//! # Complexity
//! O(B * n) where B = total burst time, n = process count.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use log::{debug, trace};

use super::{log_summary, SchedulingAlgorithm};
use crate::dispatching::{rules::ShortestRemaining, select_best};
use crate::error::SchedulingError;
use crate::models::{arrival_sorted, MetricsCollector, Process, SchedulingResult, Timeline};
use crate::validation::check_processes;

/// Preemptive shortest-remaining-time policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Srt;

/// Slice currently holding the CPU: (process index, slice start).
type RunningSlice = (usize, i64);

impl SchedulingAlgorithm for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulingResult, SchedulingError> {
        check_processes(processes)?;
        debug!("SRT: scheduling {} process(es)", processes.len());

        let mut states = arrival_sorted(processes);
        let mut raw = Timeline::new();
        let mut metrics = MetricsCollector::new();
        let mut current_time = 0;
        let mut running: Option<RunningSlice> = None;

        while metrics.completed() < states.len() {
            let now = current_time;
            let picked = select_best(&ShortestRemaining, &states, |p| {
                p.has_arrived(now) && !p.is_complete()
            });

            let Some(idx) = picked else {
                // Everything unfinished arrives later
                let next_arrival = states
                    .iter()
                    .filter(|p| !p.is_complete())
                    .map(|p| p.arrival_time())
                    .min();
                match next_arrival {
                    Some(t) => {
                        trace!("SRT: idle {current_time}-{t}");
                        current_time = t;
                        continue;
                    }
                    None => break,
                }
            };

            if running.map(|(i, _)| i) != Some(idx) {
                if let Some((prev, start)) = running {
                    trace!(
                        "SRT: {} preempted by {} at {current_time}",
                        states[prev].id(),
                        states[idx].id()
                    );
                    raw.push(states[prev].id(), start, current_time);
                }
                running = Some((idx, current_time));
            }

            states[idx].execute(1);
            current_time += 1;

            if states[idx].is_complete() {
                metrics.record(states[idx].process(), current_time);
                if let Some((_, start)) = running.take() {
                    raw.push(states[idx].id(), start, current_time);
                }
            }
        }

        let result = metrics.finish(raw.coalesced());
        log_summary(self.name(), &result);
        Ok(result)
    }
}
