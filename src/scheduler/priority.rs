//! Non-preemptive priority scheduling.
//!
//! Lower priority value = higher priority. Among ready processes that
//! share the minimum value, the first one found in working-copy order
//! wins. Once dispatched, a process runs its full burst; the scheduler
//! never preempts. Starvation of low-priority processes is inherent to
//! this algorithm and is not mitigated.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use super::metrics;
use crate::models::{CompletedProcess, GanttSlice, Process, SchedulingResult};

/// Simulates non-preemptive priority scheduling over the given processes.
///
/// Pure core without input guards; see [`crate::scheduler::run_priority`]
/// for the checked entry point.
pub fn schedule(processes: &[Process]) -> SchedulingResult {
    let mut pending: Vec<&Process> = processes.iter().collect();
    let mut gantt: Vec<GanttSlice> = Vec::new();
    let mut completed = Vec::with_capacity(pending.len());
    let mut current_time = 0i64;
    let mut idle_open = false;

    while !pending.is_empty() {
        // Highest-priority ready process; first found wins ties
        let mut chosen: Option<usize> = None;
        for (i, p) in pending.iter().enumerate() {
            if p.arrival_time <= current_time
                && chosen.map_or(true, |c| p.priority < pending[c].priority)
            {
                chosen = Some(i);
            }
        }

        let Some(index) = chosen else {
            // Nothing ready: jump to the next arrival. The idle_open flag
            // guards against logging a second slice for the same gap if
            // the loop re-enters without the clock advancing.
            let next_arrival = pending
                .iter()
                .map(|p| p.arrival_time)
                .min()
                .unwrap_or(current_time);
            if !idle_open {
                gantt.push(GanttSlice::idle(current_time, next_arrival));
                idle_open = true;
            }
            current_time = next_arrival;
            continue;
        };

        idle_open = false;
        let process = pending.remove(index);
        let start_time = current_time;
        current_time += process.burst_time;
        gantt.push(GanttSlice::run(process, start_time, current_time));
        completed.push(CompletedProcess::finish(process, start_time, current_time));
    }

    metrics::aggregate(gantt, completed)
}
