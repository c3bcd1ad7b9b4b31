//! Deterministic CPU scheduling simulator.
//!
//! Simulates classical single-CPU scheduling policies over a finite set of
//! processes and reports the execution timeline (Gantt chart) together with
//! per-process waiting and turnaround times.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessState`, `GanttChartEntry`,
//!   `Timeline`, `SchedulingResult`
//! - **`scheduler`**: Policies — `Fcfs`, `Sjf`, `Srt`, `RoundRobin`, the
//!   `Algorithm` selector, `ScheduleRequest` and `ScheduleKpi`
//! - **`dispatching`**: Selection rules used by the shortest-job policies
//! - **`validation`**: Input integrity checks (IDs, arrival and burst times, quantum)
//! - **`error`**: `SchedulingError`
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{Algorithm, SchedulingAlgorithm};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 8),
//! ];
//! let result = Algorithm::Fcfs.schedule(&processes).unwrap();
//! assert_eq!(result.waiting_time("P3"), Some(6));
//! ```
//!
//! # Logging
//!
//! Emits `debug`/`trace` records through the `log` facade. No logger is
//! installed by the library.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::SchedulingError;
