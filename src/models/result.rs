//! Simulation result model.
//!
//! A [`SchedulingResult`] is the sole output of every algorithm: the
//! full Gantt sequence, the annotated processes in completion order,
//! and the aggregate statistics over them.

use serde::{Deserialize, Serialize};

use super::{CompletedProcess, GanttSlice};

/// The complete outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Chronological, gap-free Gantt sequence covering `[0, makespan]`.
    pub gantt: Vec<GanttSlice>,
    /// Annotated processes in completion order (not input order).
    pub processes: Vec<CompletedProcess>,
    /// Arithmetic mean of per-process waiting times.
    pub average_waiting_time: f64,
    /// Arithmetic mean of per-process turnaround times.
    pub average_turnaround_time: f64,
    /// Arithmetic mean of per-process response times.
    pub average_response_time: f64,
    /// Percentage of the simulated span spent running processes (0..=100).
    pub cpu_utilization: f64,
}

impl SchedulingResult {
    /// End of the last slice, i.e. the final completion time. 0 if empty.
    pub fn makespan(&self) -> i64 {
        self.gantt.last().map(|s| s.end_time).unwrap_or(0)
    }

    /// Sum of all slice durations (busy and idle).
    pub fn total_time(&self) -> i64 {
        self.gantt.iter().map(|s| s.duration()).sum()
    }

    /// Sum of non-idle slice durations.
    pub fn busy_time(&self) -> i64 {
        self.gantt
            .iter()
            .filter(|s| !s.is_idle())
            .map(|s| s.duration())
            .sum()
    }

    /// Sum of idle slice durations.
    pub fn idle_time(&self) -> i64 {
        self.gantt
            .iter()
            .filter(|s| s.is_idle())
            .map(|s| s.duration())
            .sum()
    }

    /// Finds the annotated process with the given ID.
    pub fn completed(&self, id: &str) -> Option<&CompletedProcess> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Number of Gantt slices (busy and idle).
    pub fn slice_count(&self) -> usize {
        self.gantt.len()
    }
}
