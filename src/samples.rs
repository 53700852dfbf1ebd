//! Sample workloads and the process color palette.
//!
//! Ready-made process sets for demonstrations and tests, plus the
//! palette consumers use to color processes by input position. The
//! engine itself never reads colors; they ride along as opaque tags.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Colors assigned to processes round-robin by input position.
pub const PROCESS_COLORS: [&str; 12] = [
    "#3b82f6", // Blue
    "#f97316", // Orange
    "#10b981", // Green
    "#6366f1", // Indigo
    "#ec4899", // Pink
    "#8b5cf6", // Purple
    "#14b8a6", // Teal
    "#ef4444", // Red
    "#f59e0b", // Amber
    "#84cc16", // Lime
    "#06b6d4", // Cyan
    "#d946ef", // Fuchsia
];

/// Conventional gray for rendering idle slices.
pub const IDLE_COLOR: &str = "#d1d5db";

/// Color for the process at the given input position, cycling the palette.
pub fn process_color(index: usize) -> &'static str {
    PROCESS_COLORS[index % PROCESS_COLORS.len()]
}

/// A named, ready-to-run set of processes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSet {
    /// Set name.
    pub name: String,
    /// What the set demonstrates.
    pub description: String,
    /// Processes with IDs and palette colors already assigned.
    pub processes: Vec<Process>,
}

/// The built-in demonstration sets.
///
/// Process IDs follow the `sample-{set}-{index}` convention and colors
/// come from [`process_color`].
pub fn sample_sets() -> Vec<SampleSet> {
    vec![
        build_set(
            0,
            "Basic Set",
            "A simple set of processes with varied arrival times and burst times",
            &[("P1", 0, 5, 3), ("P2", 1, 3, 1), ("P3", 2, 8, 4), ("P4", 3, 2, 2)],
        ),
        build_set(
            1,
            "Priority Example",
            "Processes with same arrival times but different priorities",
            &[("P1", 0, 7, 2), ("P2", 0, 4, 1), ("P3", 0, 9, 3), ("P4", 0, 3, 4)],
        ),
        build_set(
            2,
            "Round Robin Demo",
            "Processes that demonstrate context switching in Round Robin",
            &[
                ("P1", 0, 5, 1),
                ("P2", 0, 4, 1),
                ("P3", 0, 3, 1),
                ("P4", 4, 6, 1),
                ("P5", 6, 2, 1),
            ],
        ),
    ]
}

fn build_set(
    set_index: usize,
    name: &str,
    description: &str,
    rows: &[(&str, i64, i64, i32)],
) -> SampleSet {
    let processes = rows
        .iter()
        .enumerate()
        .map(|(i, &(name, arrival, burst, priority))| {
            Process::new(format!("sample-{set_index}-{i}"))
                .with_name(name)
                .with_arrival(arrival)
                .with_burst(burst)
                .with_priority(priority)
                .with_color(process_color(i))
        })
        .collect();
    SampleSet {
        name: name.into(),
        description: description.into(),
        processes,
    }
}

/// Generates `count` random processes with bounded parameters.
///
/// Arrivals in `0..=10`, bursts in `1..=10`, priorities in `1..=5` —
/// small enough to keep resulting timelines readable. Names are
/// `P1..Pn` and IDs `rand-0..rand-{n-1}`.
pub fn random_workload<R: Rng>(count: usize, rng: &mut R) -> Vec<Process> {
    (0..count)
        .map(|i| {
            Process::new(format!("rand-{i}"))
                .with_name(format!("P{}", i + 1))
                .with_arrival(rng.random_range(0..=10))
                .with_burst(rng.random_range(1..=10))
                .with_priority(rng.random_range(1..=5))
                .with_color(process_color(i))
        })
        .collect()
}
