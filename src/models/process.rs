//! Process model.
//!
//! A process is a non-interactive batch job competing for a single CPU:
//! it becomes ready at its arrival time, requires a fully known burst of
//! CPU time, and carries a static priority used only by the priority
//! scheduler.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// A process submitted to the simulator.
///
/// Immutable as supplied by the caller; the engine works on its own
/// copies and annotates them into [`CompletedProcess`] values. `color`
/// is a presentation tag carried through to the Gantt output unchanged —
/// the engine never interprets it.
///
/// # Time Representation
/// All times are integer ticks on a single simulated clock starting at t=0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier within a simulation run.
    pub id: String,
    /// Display label, unique within a run (enforced by the input side).
    pub name: String,
    /// Instant the process becomes ready (>= 0).
    pub arrival_time: i64,
    /// Total CPU time required (> 0).
    pub burst_time: i64,
    /// Static priority; lower value = higher priority.
    pub priority: i32,
    /// Presentation tag, opaque to the engine.
    pub color: String,
}

impl Process {
    /// Creates a new process with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            arrival_time: 0,
            burst_time: 1,
            priority: 0,
            color: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time (total CPU time required).
    pub fn with_burst(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the static priority (lower = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the presentation color tag.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// A process annotated with its simulation outcome.
///
/// Produced once per process when its full burst has been serviced.
/// Derivation is centralized in [`CompletedProcess::finish`] so the
/// turnaround identity (`turnaround = waiting + burst =
/// completion - arrival`) holds for every instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process identifier (echoed from the input).
    pub id: String,
    /// Display name (echoed from the input).
    pub name: String,
    /// Arrival time (echoed from the input).
    pub arrival_time: i64,
    /// Burst time (echoed from the input).
    pub burst_time: i64,
    /// Static priority (echoed from the input).
    pub priority: i32,
    /// Presentation color tag (echoed from the input).
    pub color: String,
    /// Instant of first dispatch onto the CPU.
    pub start_time: i64,
    /// Instant all burst time had been serviced.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`: time spent ready but not running.
    pub waiting_time: i64,
    /// `start_time - arrival_time`: time from arrival to first dispatch.
    pub response_time: i64,
}

impl CompletedProcess {
    /// Annotates a process with its outcome, deriving the three metrics.
    pub fn finish(process: &Process, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            name: process.name.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            color: process.color.clone(),
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: start_time - process.arrival_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("p1")
            .with_name("P1")
            .with_arrival(3)
            .with_burst(7)
            .with_priority(2)
            .with_color("#3b82f6");

        assert_eq!(p.id, "p1");
        assert_eq!(p.name, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
        assert_eq!(p.color, "#3b82f6");
    }

    #[test]
    fn test_finish_derives_metrics() {
        let p = Process::new("p1").with_name("P1").with_arrival(2).with_burst(5);
        // Dispatched at 4, done at 9
        let done = CompletedProcess::finish(&p, 4, 9);

        assert_eq!(done.start_time, 4);
        assert_eq!(done.completion_time, 9);
        assert_eq!(done.turnaround_time, 7);
        assert_eq!(done.waiting_time, 2);
        assert_eq!(done.response_time, 2);
        assert_eq!(done.turnaround_time, done.waiting_time + done.burst_time);
    }

    #[test]
    fn test_finish_immediate_dispatch() {
        let p = Process::new("p1").with_arrival(0).with_burst(4);
        let done = CompletedProcess::finish(&p, 0, 4);

        assert_eq!(done.waiting_time, 0);
        assert_eq!(done.response_time, 0);
        assert_eq!(done.turnaround_time, 4);
    }

    #[test]
    fn test_finish_preserves_input_fields() {
        let p = Process::new("p9")
            .with_name("P9")
            .with_priority(4)
            .with_color("#ef4444")
            .with_burst(2);
        let done = CompletedProcess::finish(&p, 0, 2);

        assert_eq!(done.id, "p9");
        assert_eq!(done.name, "P9");
        assert_eq!(done.priority, 4);
        assert_eq!(done.color, "#ef4444");
    }
}
