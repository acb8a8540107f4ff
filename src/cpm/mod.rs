//! Critical path method: forward/backward passes and path extraction.
//!
//! # Algorithm
//!
//! Two worklist traversals over the dependency graph (Kahn's algorithm):
//! the forward pass finalizes earliest start/finish in topological order,
//! the backward pass finalizes latest start/finish in reverse topological
//! order, anchored to the project's earliest finish. Tasks where earliest
//! and latest coincide have zero slack and form the critical path.
//!
//! Linear time in tasks + edges. Both passes count finalized tasks and
//! report a [`CyclicDependencyError`] when any task never reaches zero
//! degree, so cycles fail loudly instead of producing partial results.
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

mod backward;
mod critical;
mod forward;
mod metrics;

pub use backward::backward_pass;
pub use critical::critical_path;
pub use forward::forward_pass;
pub use metrics::ScheduleMetrics;

use std::collections::HashMap;
use thiserror::Error;

use crate::graph::DependencyGraph;
use crate::models::{CpmSchedule, DependencyEdge, ScheduleTiming, Task};

/// The dependency graph contains a cycle, so no schedule exists.
///
/// Reported when the worklist passes leave tasks unfinalized; `task_ids`
/// names the tasks involved, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dependency cycle detected involving tasks: {}", .task_ids.join(", "))]
pub struct CyclicDependencyError {
    /// Tasks that never reached zero degree.
    pub task_ids: Vec<String>,
}

/// Earliest start/finish of one task, in day offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarliestTimes {
    /// Earliest start day.
    pub start: i64,
    /// Earliest finish day.
    pub finish: i64,
}

/// Latest start/finish of one task, in day offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestTimes {
    /// Latest start day.
    pub start: i64,
    /// Latest finish day.
    pub finish: i64,
}

/// Computes the full schedule for a snapshot of tasks and edges.
///
/// Builds the dependency graph, runs both passes, and extracts the
/// critical path. Pure function of its inputs: no shared state, no I/O,
/// safe to call concurrently, and identical inputs yield identical
/// outputs.
///
/// # Errors
///
/// [`CyclicDependencyError`] if the accepted `blocks` edges form a cycle.
///
/// # Example
///
/// ```
/// use cpm_engine::cpm::compute_schedule;
/// use cpm_engine::models::{DependencyEdge, Task};
///
/// let tasks = vec![
///     Task::new("A").with_effort_hours(16.0),
///     Task::new("B").with_effort_hours(16.0),
/// ];
/// let edges = vec![DependencyEdge::blocks("E1", "A", "B")];
///
/// let schedule = compute_schedule(&tasks, &edges).unwrap();
/// assert_eq!(schedule.project_duration_days, 4);
/// assert_eq!(schedule.critical_path, vec!["A", "B"]);
/// ```
pub fn compute_schedule(
    tasks: &[Task],
    edges: &[DependencyEdge],
) -> Result<CpmSchedule, CyclicDependencyError> {
    let graph = DependencyGraph::build(tasks, edges);
    let durations = duration_map(tasks);

    let earliest = forward_pass(&graph, &durations)?;
    let latest = backward_pass(&graph, &durations, &earliest)?;
    let critical_path = critical_path(&graph, &earliest, &latest);

    let mut timings = HashMap::with_capacity(graph.task_count());
    for id in graph.task_order() {
        let (Some(e), Some(l)) = (earliest.get(id), latest.get(id)) else {
            continue;
        };
        timings.insert(
            id.clone(),
            ScheduleTiming {
                earliest_start: e.start,
                earliest_finish: e.finish,
                latest_start: l.start,
                latest_finish: l.finish,
                is_critical: e.start == l.start && e.finish == l.finish,
            },
        );
    }

    let project_duration_days = earliest.values().map(|t| t.finish).max().unwrap_or(0);

    Ok(CpmSchedule {
        timings,
        critical_path,
        project_duration_days,
    })
}

/// Task durations keyed by ID. Duplicate IDs keep the first occurrence,
/// matching the graph arena.
pub(crate) fn duration_map(tasks: &[Task]) -> HashMap<String, i64> {
    let mut durations = HashMap::with_capacity(tasks.len());
    for task in tasks {
        durations
            .entry(task.id.clone())
            .or_insert_with(|| task.duration_days());
    }
    durations
}

/// Tasks in `graph` that were never finalized, in input order.
pub(crate) fn unfinalized_tasks<T>(
    graph: &DependencyGraph,
    finalized: &HashMap<String, T>,
) -> CyclicDependencyError {
    let task_ids = graph
        .task_order()
        .iter()
        .filter(|id| !finalized.contains_key(*id))
        .cloned()
        .collect();
    CyclicDependencyError { task_ids }
}
