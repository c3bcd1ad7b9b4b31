//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered sequence of CPU slices produced by a policy.
//! Each slice records one process running uninterrupted over `[start, end)`.
//!
//! Policies append raw slices as they simulate; `Timeline::coalesced`
//! merges back-to-back slices of the same process into a single entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One contiguous slice of CPU time given to one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttChartEntry {
    /// Process that held the CPU.
    pub process_id: String,
    /// Slice start (inclusive).
    pub start_time: i64,
    /// Slice end (exclusive).
    pub end_time: i64,
}

impl GanttChartEntry {
    /// Creates a new entry.
    pub fn new(process_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether `next` continues this slice without a gap or a switch.
    #[inline]
    pub fn continues_into(&self, next: &GanttChartEntry) -> bool {
        self.process_id == next.process_id && self.end_time == next.start_time
    }
}

impl fmt::Display for GanttChartEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.process_id, self.start_time, self.end_time)
    }
}

/// Ordered CPU timeline under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<GanttChartEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice. Empty slices (`start >= end`) are dropped.
    pub fn push(&mut self, process_id: impl Into<String>, start_time: i64, end_time: i64) {
        if start_time < end_time {
            self.entries
                .push(GanttChartEntry::new(process_id, start_time, end_time));
        }
    }

    /// Merges adjacent entries of the same process that touch end-to-start.
    ///
    /// Entries separated by an idle gap or by another process stay apart.
    pub fn coalesced(self) -> Self {
        let mut merged: Vec<GanttChartEntry> = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            if let Some(last) = merged.last_mut() {
                if last.continues_into(&entry) {
                    last.end_time = entry.end_time;
                    continue;
                }
            }
            merged.push(entry);
        }
        Self { entries: merged }
    }

    /// Consumes the timeline, returning its entries in execution order.
    pub fn into_entries(self) -> Vec<GanttChartEntry> {
        self.entries
    }
}
