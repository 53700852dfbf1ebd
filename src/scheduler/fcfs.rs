//! First-Come-First-Serve.
//!
//! Non-preemptive: processes run to completion in arrival order, each
//! in exactly one Gantt slice. Arrival ties keep input order (stable
//! sort).
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.1

use super::metrics;
use crate::models::{CompletedProcess, GanttSlice, Process, SchedulingResult};

/// Simulates FCFS over the given processes.
///
/// Pure core without input guards; see [`crate::scheduler::run_fcfs`]
/// for the checked entry point.
pub fn schedule(processes: &[Process]) -> SchedulingResult {
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival_time); // stable: ties keep input order

    let mut gantt = Vec::new();
    let mut completed = Vec::with_capacity(order.len());
    let mut current_time = 0i64;

    for process in order {
        if process.arrival_time > current_time {
            gantt.push(GanttSlice::idle(current_time, process.arrival_time));
            current_time = process.arrival_time;
        }

        let start_time = current_time;
        current_time += process.burst_time;
        gantt.push(GanttSlice::run(process, start_time, current_time));
        completed.push(CompletedProcess::finish(process, start_time, current_time));
    }

    metrics::aggregate(gantt, completed)
}
