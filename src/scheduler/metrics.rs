//! Shared metric aggregation.
//!
//! All three algorithms finish by handing their Gantt sequence and
//! completed-process list to [`aggregate`], so the aggregate statistics
//! are computed by exactly one routine.

use crate::models::{CompletedProcess, GanttSlice, SchedulingResult};

/// Builds a [`SchedulingResult`] from a finished simulation.
///
/// CPU utilization is the non-idle share of the total simulated span,
/// as a percentage; 0 when the span is empty. Averages are unweighted
/// arithmetic means over the completed processes.
pub(crate) fn aggregate(
    gantt: Vec<GanttSlice>,
    processes: Vec<CompletedProcess>,
) -> SchedulingResult {
    let total_time: i64 = gantt.iter().map(|s| s.duration()).sum();
    let busy_time: i64 = gantt
        .iter()
        .filter(|s| !s.is_idle())
        .map(|s| s.duration())
        .sum();

    let cpu_utilization = if total_time > 0 {
        busy_time as f64 / total_time as f64 * 100.0
    } else {
        0.0
    };

    let (average_waiting_time, average_turnaround_time, average_response_time) =
        if processes.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let n = processes.len() as f64;
            (
                processes.iter().map(|p| p.waiting_time as f64).sum::<f64>() / n,
                processes
                    .iter()
                    .map(|p| p.turnaround_time as f64)
                    .sum::<f64>()
                    / n,
                processes
                    .iter()
                    .map(|p| p.response_time as f64)
                    .sum::<f64>()
                    / n,
            )
        };

    SchedulingResult {
        gantt,
        processes,
        average_waiting_time,
        average_turnaround_time,
        average_response_time,
        cpu_utilization,
    }
}
