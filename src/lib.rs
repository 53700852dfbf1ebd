//! Single-CPU process-scheduling simulator.
//!
//! Computes deterministic execution timelines (Gantt sequences) and
//! per-process performance metrics for three classic algorithms:
//! First-Come-First-Serve, non-preemptive priority scheduling, and
//! Round Robin with a fixed time quantum.
//!
//! The engine is a pure function over its input: each invocation works
//! on its own copies, holds no state across calls, and always
//! terminates — every loop iteration either completes a process or
//! advances the clock to a future arrival.
//!
//! # Modules
//!
//! - **`models`**: domain types — [`models::Process`],
//!   [`models::CompletedProcess`], [`models::GanttSlice`],
//!   [`models::SchedulingResult`]
//! - **`scheduler`**: the three algorithms, their checked entry points,
//!   and the shared metric aggregation
//! - **`samples`**: demonstration workloads and the process color palette
//! - **`validation`**: input integrity checks for the collection side
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler;
//!
//! let processes = vec![
//!     Process::new("p1").with_name("P1").with_arrival(0).with_burst(5),
//!     Process::new("p2").with_name("P2").with_arrival(0).with_burst(4),
//!     Process::new("p3").with_name("P3").with_arrival(0).with_burst(3),
//! ];
//!
//! let result = scheduler::run_round_robin(&processes, 2).unwrap();
//! assert_eq!(result.makespan(), 12);
//! assert_eq!(result.completed("p2").unwrap().completion_time, 10);
//! assert!((result.cpu_utilization - 100.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod samples;
pub mod scheduler;
pub mod validation;
