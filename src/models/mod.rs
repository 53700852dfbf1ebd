//! Simulation domain models.
//!
//! Core data types for describing a workload and reading back a
//! simulation outcome:
//!
//! | Type | Role |
//! |------|------|
//! | [`Process`] | Input: arrival, burst, priority, presentation color |
//! | [`CompletedProcess`] | Output: input fields plus timing metrics |
//! | [`GanttSlice`] / [`SliceSubject`] | One CPU-occupancy interval (process or idle) |
//! | [`SchedulingResult`] | Gantt sequence + processes + aggregate statistics |

mod gantt;
mod process;
mod result;

pub use gantt::{GanttSlice, SliceSubject};
pub use process::{CompletedProcess, Process};
pub use result::SchedulingResult;
