//! Gantt timeline model.
//!
//! A Gantt sequence is a chronological list of CPU-occupancy intervals.
//! Slices are contiguous (each starts where the previous ended), never
//! overlap, and cover the whole simulated span `[0, makespan]` — idle
//! slices fill every instant no process is running.

use serde::{Deserialize, Serialize};

use super::Process;

/// One contiguous interval of CPU occupancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttSlice {
    /// What occupied the CPU during this interval.
    pub subject: SliceSubject,
    /// Interval start (inclusive).
    pub start_time: i64,
    /// Interval end (exclusive). Always greater than `start_time`.
    pub end_time: i64,
}

/// What occupies the CPU during a slice.
///
/// Idle is a distinguished variant rather than a reserved process ID,
/// so it can never collide with a real identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SliceSubject {
    /// No process was running.
    Idle,
    /// A process was running.
    Process {
        /// Running process ID.
        id: String,
        /// Running process name.
        name: String,
        /// Presentation color tag of the running process.
        color: String,
    },
}

impl GanttSlice {
    /// Creates an idle slice covering `[start_time, end_time)`.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self {
            subject: SliceSubject::Idle,
            start_time,
            end_time,
        }
    }

    /// Creates an execution slice for `process` covering `[start_time, end_time)`.
    pub fn run(process: &Process, start_time: i64, end_time: i64) -> Self {
        Self {
            subject: SliceSubject::Process {
                id: process.id.clone(),
                name: process.name.clone(),
                color: process.color.clone(),
            },
            start_time,
            end_time,
        }
    }

    /// Slice duration (`end_time - start_time`).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether this slice is idle time.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.subject, SliceSubject::Idle)
    }

    /// Display label: the process name, or `"Idle"`.
    pub fn label(&self) -> &str {
        match &self.subject {
            SliceSubject::Idle => "Idle",
            SliceSubject::Process { name, .. } => name,
        }
    }

    /// Running process ID, or `None` for idle slices.
    pub fn process_id(&self) -> Option<&str> {
        match &self.subject {
            SliceSubject::Idle => None,
            SliceSubject::Process { id, .. } => Some(id),
        }
    }
}
