//! Forward pass: earliest start/finish times.

use std::collections::{HashMap, VecDeque};

use super::{unfinalized_tasks, CyclicDependencyError, EarliestTimes};
use crate::graph::DependencyGraph;

/// Computes earliest start/finish for every task.
///
/// Kahn worklist over in-degrees: seeds with zero-in-degree tasks in
/// input order, then finalizes each dequeued task from the maximum
/// earliest finish among its (already finalized) predecessors. FIFO
/// discovery order keeps runs deterministic; it does not affect the
/// computed times.
///
/// # Errors
///
/// [`CyclicDependencyError`] naming the tasks that never reached zero
/// in-degree, if the finalized count falls short of the task count.
pub fn forward_pass(
    graph: &DependencyGraph,
    durations: &HashMap<String, i64>,
) -> Result<HashMap<String, EarliestTimes>, CyclicDependencyError> {
    let mut in_degree: HashMap<&str, usize> = graph
        .task_order()
        .iter()
        .map(|id| (id.as_str(), graph.in_degree(id)))
        .collect();

    let mut queue: VecDeque<&str> = graph
        .task_order()
        .iter()
        .filter(|id| graph.in_degree(id) == 0)
        .map(String::as_str)
        .collect();

    let mut times: HashMap<String, EarliestTimes> = HashMap::with_capacity(graph.task_count());

    while let Some(task_id) = queue.pop_front() {
        let start = graph
            .predecessors(task_id)
            .iter()
            .filter_map(|pred| times.get(pred.as_str()))
            .map(|t| t.finish)
            .max()
            .unwrap_or(0)
            .max(0);
        let duration = durations.get(task_id).copied().unwrap_or(1);

        times.insert(
            task_id.to_string(),
            EarliestTimes {
                start,
                finish: start + duration,
            },
        );

        for succ in graph.successors(task_id) {
            if let Some(degree) = in_degree.get_mut(succ.as_str()) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(succ.as_str());
                }
            }
        }
    }

    if times.len() != graph.task_count() {
        return Err(unfinalized_tasks(graph, &times));
    }

    Ok(times)
}
