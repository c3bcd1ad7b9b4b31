//! Non-preemptive Shortest-Job-First scheduling.
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived by the current time into the
//!    ready pool (in arrival order).
//! 2. If the pool is empty, jump the clock to the next arrival.
//! 3. Dispatch the pooled process with the smallest burst time; the first
//!    in pool order wins ties.
//! 4. Run it to completion, then repeat.
//!
//! # Complexity
//! O(n^2) in the number of processes (linear scan per dispatch).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use std::collections::VecDeque;

use log::{debug, trace};

use super::{log_summary, SchedulingAlgorithm};
use crate::dispatching::{rules::ShortestBurst, select_best};
use crate::error::SchedulingError;
use crate::models::{
    arrival_sorted, MetricsCollector, Process, ProcessState, SchedulingResult, Timeline,
};
use crate::validation::check_processes;

/// Non-preemptive shortest-job-first policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sjf;

impl SchedulingAlgorithm for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulingResult, SchedulingError> {
        check_processes(processes)?;
        debug!("SJF: scheduling {} process(es)", processes.len());

        let mut pending: VecDeque<ProcessState> = arrival_sorted(processes).into();
        let mut pool: Vec<ProcessState> = Vec::new();
        let mut timeline = Timeline::new();
        let mut metrics = MetricsCollector::new();
        let mut current_time = 0;

        loop {
            while pending
                .front()
                .is_some_and(|p| p.has_arrived(current_time))
            {
                if let Some(p) = pending.pop_front() {
                    pool.push(p);
                }
            }

            let Some(idx) = select_best(&ShortestBurst, &pool, |_| true) else {
                match pending.front() {
                    Some(next) => {
                        trace!("SJF: idle until {}", next.arrival_time());
                        current_time = next.arrival_time();
                        continue;
                    }
                    None => break,
                }
            };

            let job = pool.remove(idx);
            let start = current_time;
            let end = start + job.burst_time();
            trace!("SJF: {} runs {start}-{end}", job.id());

            timeline.push(job.id(), start, end);
            metrics.record(job.process(), end);
            current_time = end;
        }

        let result = metrics.finish(timeline);
        log_summary(self.name(), &result);
        Ok(result)
    }
}
