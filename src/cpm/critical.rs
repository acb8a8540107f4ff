//! Critical path extraction.

use std::collections::HashMap;

use super::{EarliestTimes, LatestTimes};
use crate::graph::DependencyGraph;

/// Selects the zero-slack tasks, ordered by earliest start.
///
/// A task is critical when its earliest and latest times coincide on
/// both start and finish. Ties on earliest start keep input task order,
/// so the result is deterministic for identical inputs.
///
/// Isolated tasks are only critical when they happen to span the whole
/// project: their latest finish is clamped to the project finish, so any
/// shorter isolated task picks up positive slack and is excluded.
pub fn critical_path(
    graph: &DependencyGraph,
    earliest: &HashMap<String, EarliestTimes>,
    latest: &HashMap<String, LatestTimes>,
) -> Vec<String> {
    let mut critical: Vec<(i64, &String)> = graph
        .task_order()
        .iter()
        .filter_map(|id| {
            let e = earliest.get(id)?;
            let l = latest.get(id)?;
            (e.start == l.start && e.finish == l.finish).then_some((e.start, id))
        })
        .collect();

    // Stable sort preserves input order among equal earliest starts.
    critical.sort_by_key(|&(start, _)| start);
    critical.into_iter().map(|(_, id)| id.clone()).collect()
}
