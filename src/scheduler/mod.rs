//! Scheduling algorithms and checked entry points.
//!
//! Three classic single-CPU algorithms over the same input and output
//! contract, sharing one metric-aggregation step:
//!
//! | Algorithm | Preemption | Extra parameter |
//! |-----------|------------|-----------------|
//! | [`fcfs`] | None | — |
//! | [`priority`] | None (static priority) | — |
//! | [`round_robin`] | Fixed quantum | `quantum >= 1` |
//!
//! The per-algorithm `schedule` functions are the unguarded pure cores.
//! The `run_*` entry points reject input the cores assume away: an empty
//! process list, a non-positive burst time, or a quantum below 1.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler;
//!
//! let processes = vec![
//!     Process::new("p1").with_name("P1").with_arrival(0).with_burst(5),
//!     Process::new("p2").with_name("P2").with_arrival(1).with_burst(3),
//! ];
//! let result = scheduler::run_fcfs(&processes).unwrap();
//! assert_eq!(result.makespan(), 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod fcfs;
mod metrics;
pub mod priority;
pub mod round_robin;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Process, SchedulingResult};

/// Quantum used by [`Algorithm::run`] when the caller supplies none.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Selects one of the supported scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Serve.
    Fcfs,
    /// Non-preemptive static priority.
    Priority,
    /// Round Robin with a fixed time quantum.
    RoundRobin,
}

impl Algorithm {
    /// Runs the selected algorithm through its checked entry point.
    ///
    /// `quantum` only applies to Round Robin and defaults to
    /// [`DEFAULT_QUANTUM`] when absent.
    pub fn run(
        &self,
        processes: &[Process],
        quantum: Option<i64>,
    ) -> Result<SchedulingResult, ScheduleError> {
        match self {
            Algorithm::Fcfs => run_fcfs(processes),
            Algorithm::Priority => run_priority(processes),
            Algorithm::RoundRobin => {
                run_round_robin(processes, quantum.unwrap_or(DEFAULT_QUANTUM))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "FCFS"),
            Algorithm::Priority => write!(f, "Priority"),
            Algorithm::RoundRobin => write!(f, "Round Robin"),
        }
    }
}

/// Error returned by the checked entry points.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleError {
    /// Error category.
    pub kind: ScheduleErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleErrorKind {
    /// The process list is empty.
    EmptyInput,
    /// A process has a burst time <= 0.
    NonPositiveBurst,
    /// The Round Robin quantum is below 1.
    InvalidQuantum,
}

impl ScheduleError {
    fn new(kind: ScheduleErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ScheduleError {}

/// Runs First-Come-First-Serve.
pub fn run_fcfs(processes: &[Process]) -> Result<SchedulingResult, ScheduleError> {
    check_input(processes)?;
    Ok(fcfs::schedule(processes))
}

/// Runs non-preemptive priority scheduling.
pub fn run_priority(processes: &[Process]) -> Result<SchedulingResult, ScheduleError> {
    check_input(processes)?;
    Ok(priority::schedule(processes))
}

/// Runs Round Robin with the given time quantum.
///
/// Rejects `quantum < 1`: a zero quantum would make no progress and the
/// simulation loop would never terminate.
pub fn run_round_robin(
    processes: &[Process],
    quantum: i64,
) -> Result<SchedulingResult, ScheduleError> {
    check_input(processes)?;
    if quantum < 1 {
        return Err(ScheduleError::new(
            ScheduleErrorKind::InvalidQuantum,
            format!("time quantum must be at least 1, got {quantum}"),
        ));
    }
    Ok(round_robin::schedule(processes, quantum))
}

fn check_input(processes: &[Process]) -> Result<(), ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::new(
            ScheduleErrorKind::EmptyInput,
            "process list is empty",
        ));
    }
    if let Some(p) = processes.iter().find(|p| p.burst_time <= 0) {
        return Err(ScheduleError::new(
            ScheduleErrorKind::NonPositiveBurst,
            format!("process '{}' has burst time {}", p.name, p.burst_time),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(id: &str, arrival: i64, burst: i64, priority: i32) -> Process {
        Process::new(id)
            .with_name(id)
            .with_arrival(arrival)
            .with_burst(burst)
            .with_priority(priority)
    }

    fn mixed_workload() -> Vec<Process> {
        vec![
            make("p1", 0, 5, 3),
            make("p2", 1, 3, 1),
            make("p3", 7, 8, 4),
            make("p4", 3, 2, 2),
            make("p5", 20, 1, 1),
        ]
    }

    /// Conservation, contiguity, and the turnaround identity, for any result.
    fn assert_well_formed(r: &SchedulingResult, input: &[Process]) {
        // Contiguous coverage of [0, makespan], positive-length slices
        let mut clock = 0i64;
        for slice in &r.gantt {
            assert_eq!(slice.start_time, clock, "gap or overlap at t={clock}");
            assert!(slice.end_time > slice.start_time, "zero-length slice");
            clock = slice.end_time;
        }
        assert_eq!(clock, r.makespan());

        // Conservation: busy time equals total burst time
        let burst_total: i64 = input.iter().map(|p| p.burst_time).sum();
        assert_eq!(r.busy_time(), burst_total);
        assert_eq!(r.total_time(), r.makespan());

        // Every process completed exactly once, with consistent metrics
        assert_eq!(r.process_count(), input.len());
        for p in &r.processes {
            assert_eq!(p.turnaround_time, p.waiting_time + p.burst_time);
            assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time);
            assert!(p.completion_time >= p.arrival_time + p.burst_time);
            assert!(p.waiting_time >= 0);
            assert!(p.response_time >= 0);
        }
    }

    #[test]
    fn test_all_algorithms_well_formed() {
        let input = mixed_workload();
        assert_well_formed(&run_fcfs(&input).unwrap(), &input);
        assert_well_formed(&run_priority(&input).unwrap(), &input);
        for quantum in [1, 2, 3, 7] {
            assert_well_formed(&run_round_robin(&input, quantum).unwrap(), &input);
        }
    }

    #[test]
    fn test_all_algorithms_idempotent() {
        let input = mixed_workload();
        assert_eq!(run_fcfs(&input).unwrap(), run_fcfs(&input).unwrap());
        assert_eq!(run_priority(&input).unwrap(), run_priority(&input).unwrap());
        assert_eq!(
            run_round_robin(&input, 2).unwrap(),
            run_round_robin(&input, 2).unwrap()
        );
    }

    #[test]
    fn test_input_never_mutated() {
        let input = mixed_workload();
        let copy = input.clone();
        run_fcfs(&input).unwrap();
        run_priority(&input).unwrap();
        run_round_robin(&input, 2).unwrap();
        assert_eq!(input, copy);
    }

    #[test]
    fn test_utilization_bounds() {
        // All arrive at 0, no idle → exactly 100%
        let busy = vec![make("a", 0, 4, 1), make("b", 0, 2, 2)];
        for r in [
            run_fcfs(&busy).unwrap(),
            run_priority(&busy).unwrap(),
            run_round_robin(&busy, 2).unwrap(),
        ] {
            assert!((r.cpu_utilization - 100.0).abs() < 1e-10);
        }

        // Leading idle gap → strictly below 100%
        let gapped = vec![make("a", 5, 4, 1)];
        for r in [
            run_fcfs(&gapped).unwrap(),
            run_priority(&gapped).unwrap(),
            run_round_robin(&gapped, 2).unwrap(),
        ] {
            assert!(r.cpu_utilization < 100.0);
            assert!(r.cpu_utilization > 0.0);
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = run_fcfs(&[]).unwrap_err();
        assert_eq!(err.kind, ScheduleErrorKind::EmptyInput);
        assert_eq!(
            run_priority(&[]).unwrap_err().kind,
            ScheduleErrorKind::EmptyInput
        );
        assert_eq!(
            run_round_robin(&[], 2).unwrap_err().kind,
            ScheduleErrorKind::EmptyInput
        );
    }

    #[test]
    fn test_non_positive_burst_rejected() {
        let input = vec![make("ok", 0, 3, 1), make("bad", 0, 0, 1)];
        let err = run_fcfs(&input).unwrap_err();
        assert_eq!(err.kind, ScheduleErrorKind::NonPositiveBurst);
        assert!(err.message.contains("bad"));
    }

    #[test]
    fn test_invalid_quantum_rejected() {
        let input = vec![make("a", 0, 3, 1)];
        for quantum in [0, -1] {
            let err = run_round_robin(&input, quantum).unwrap_err();
            assert_eq!(err.kind, ScheduleErrorKind::InvalidQuantum);
        }
    }

    #[test]
    fn test_algorithm_dispatch() {
        let input = mixed_workload();
        assert_eq!(
            Algorithm::Fcfs.run(&input, None).unwrap(),
            run_fcfs(&input).unwrap()
        );
        assert_eq!(
            Algorithm::Priority.run(&input, None).unwrap(),
            run_priority(&input).unwrap()
        );
        assert_eq!(
            Algorithm::RoundRobin.run(&input, Some(3)).unwrap(),
            run_round_robin(&input, 3).unwrap()
        );
        // No quantum supplied → default
        assert_eq!(
            Algorithm::RoundRobin.run(&input, None).unwrap(),
            run_round_robin(&input, DEFAULT_QUANTUM).unwrap()
        );
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::Fcfs.to_string(), "FCFS");
        assert_eq!(Algorithm::Priority.to_string(), "Priority");
        assert_eq!(Algorithm::RoundRobin.to_string(), "Round Robin");
    }

    #[test]
    fn test_error_display() {
        let err = run_fcfs(&[]).unwrap_err();
        assert_eq!(err.to_string(), "process list is empty");
    }
}
