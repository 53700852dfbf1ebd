//! Round Robin.
//!
//! Preemptive with a fixed time quantum: the front of a FIFO ready
//! queue runs for at most `quantum` ticks, then moves to the back.
//! Processes that arrive during a quantum are admitted to the queue
//! before the preempted process re-enters — reversing that order
//! produces a different schedule.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use super::metrics;
use crate::models::{CompletedProcess, GanttSlice, Process, SchedulingResult};

/// A process being worked on: remaining burst and first-dispatch time.
struct WorkItem<'a> {
    process: &'a Process,
    remaining: i64,
    start_time: Option<i64>,
}

/// Simulates Round Robin over the given processes.
///
/// `quantum` must be >= 1; a non-positive quantum would stall the loop.
/// Pure core without input guards; see
/// [`crate::scheduler::run_round_robin`] for the checked entry point.
pub fn schedule(processes: &[Process], quantum: i64) -> SchedulingResult {
    let mut pending: Vec<WorkItem> = processes
        .iter()
        .map(|p| WorkItem {
            process: p,
            remaining: p.burst_time,
            start_time: None,
        })
        .collect();
    let mut ready: VecDeque<WorkItem> = VecDeque::new();
    let mut gantt: Vec<GanttSlice> = Vec::new();
    let mut completed = Vec::with_capacity(pending.len());
    let mut current_time = 0i64;

    // Leading idle gap before the first arrival
    if let Some(first_arrival) = pending.iter().map(|w| w.process.arrival_time).min() {
        if first_arrival > 0 {
            gantt.push(GanttSlice::idle(0, first_arrival));
            current_time = first_arrival;
        }
    }

    while !pending.is_empty() || !ready.is_empty() {
        admit_arrivals(&mut pending, &mut ready, current_time);

        let Some(mut item) = ready.pop_front() else {
            // Ready queue drained but arrivals remain: jump to the next one
            let next_arrival = pending
                .iter()
                .map(|w| w.process.arrival_time)
                .min()
                .unwrap_or(current_time);
            gantt.push(GanttSlice::idle(current_time, next_arrival));
            current_time = next_arrival;
            continue;
        };

        let started = *item.start_time.get_or_insert(current_time);

        let run = quantum.min(item.remaining);
        gantt.push(GanttSlice::run(item.process, current_time, current_time + run));
        current_time += run;
        item.remaining -= run;

        if item.remaining == 0 {
            completed.push(CompletedProcess::finish(item.process, started, current_time));
        } else {
            // Arrivals during this quantum enter ahead of the preempted process
            admit_arrivals(&mut pending, &mut ready, current_time);
            ready.push_back(item);
        }
    }

    metrics::aggregate(gantt, completed)
}

/// Moves every pending process with `arrival_time <= now` to the back of
/// the ready queue, preserving working-copy order among equal arrivals.
fn admit_arrivals<'a>(
    pending: &mut Vec<WorkItem<'a>>,
    ready: &mut VecDeque<WorkItem<'a>>,
    now: i64,
) {
    let mut i = 0;
    while i < pending.len() {
        if pending[i].process.arrival_time <= now {
            ready.push_back(pending.remove(i));
        } else {
            i += 1;
        }
    }
}
