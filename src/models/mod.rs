//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduling policy: the input
//! process record, its per-run simulation state, the execution timeline,
//! and the result with derived metrics.
//!
//! # Domain Mappings
//!
//! | u-cpusched | OS textbook | Job-shop |
//! |------------|-------------|----------|
//! | Process | Process / job | Job |
//! | GanttChartEntry | Gantt bar | Operation slot |
//! | Timeline | Gantt chart | Machine schedule |
//! | SchedulingResult | Scheduling criteria | Performance measures |

mod process;
mod result;
mod timeline;

pub use process::{arrival_sorted, Process, ProcessState};
pub use result::{MetricsCollector, SchedulingResult};
pub use timeline::{GanttChartEntry, Timeline};
