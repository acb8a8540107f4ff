//! Backward pass: latest start/finish times.

use std::collections::{HashMap, VecDeque};

use super::{unfinalized_tasks, CyclicDependencyError, EarliestTimes, LatestTimes};
use crate::graph::DependencyGraph;

/// Computes latest start/finish for every task, anchored to the
/// project's earliest finish.
///
/// Mirror of the forward pass: a Kahn worklist over out-degrees, seeded
/// with zero-out-degree tasks (leaves) and walking toward the roots.
/// A task is dequeued only once every successor has been finalized, so
/// its latest finish is the minimum over successor latest starts, clamped
/// to the project finish; leaves anchor directly at the project finish.
///
/// # Errors
///
/// [`CyclicDependencyError`] naming the tasks that never reached zero
/// out-degree. On a graph the forward pass accepted this cannot trigger,
/// but the pass checks its own finalized count rather than trusting the
/// caller's traversal order.
pub fn backward_pass(
    graph: &DependencyGraph,
    durations: &HashMap<String, i64>,
    earliest: &HashMap<String, EarliestTimes>,
) -> Result<HashMap<String, LatestTimes>, CyclicDependencyError> {
    let project_finish = earliest.values().map(|t| t.finish).max().unwrap_or(0);

    let mut out_degree: HashMap<&str, usize> = graph
        .task_order()
        .iter()
        .map(|id| (id.as_str(), graph.out_degree(id)))
        .collect();

    let mut queue: VecDeque<&str> = graph
        .task_order()
        .iter()
        .filter(|id| graph.out_degree(id) == 0)
        .map(String::as_str)
        .collect();

    let mut times: HashMap<String, LatestTimes> = HashMap::with_capacity(graph.task_count());

    while let Some(task_id) = queue.pop_front() {
        let finish = graph
            .successors(task_id)
            .iter()
            .filter_map(|succ| times.get(succ.as_str()))
            .map(|t| t.start)
            .min()
            .unwrap_or(project_finish)
            .min(project_finish);
        let duration = durations.get(task_id).copied().unwrap_or(1);

        times.insert(
            task_id.to_string(),
            LatestTimes {
                start: finish - duration,
                finish,
            },
        );

        for pred in graph.predecessors(task_id) {
            if let Some(degree) = out_degree.get_mut(pred.as_str()) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(pred.as_str());
                }
            }
        }
    }

    if times.len() != graph.task_count() {
        return Err(unfinalized_tasks(graph, &times));
    }

    Ok(times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpm::{duration_map, forward_pass};
    use crate::models::{DependencyEdge, Task};

    fn setup(
        tasks: &[(&str, f64)],
        edges: &[(&str, &str)],
    ) -> (
        DependencyGraph,
        HashMap<String, i64>,
        HashMap<String, EarliestTimes>,
    ) {
        let tasks: Vec<Task> = tasks
            .iter()
            .map(|(id, days)| Task::new(*id).with_effort_hours(days * 8.0))
            .collect();
        let edges: Vec<DependencyEdge> = edges
            .iter()
            .enumerate()
            .map(|(i, (from, to))| DependencyEdge::blocks(format!("E{i}"), *from, *to))
            .collect();
        let graph = DependencyGraph::build(&tasks, &edges);
        let durations = duration_map(&tasks);
        let earliest = forward_pass(&graph, &durations).unwrap();
        (graph, durations, earliest)
    }

    #[test]
    fn test_leaves_anchor_at_project_finish() {
        // A (3d) and B (5d), independent. Project finish = 5.
        let (graph, durations, earliest) = setup(&[("A", 3.0), ("B", 5.0)], &[]);
        let times = backward_pass(&graph, &durations, &earliest).unwrap();

        assert_eq!(times["A"], LatestTimes { start: 2, finish: 5 });
        assert_eq!(times["B"], LatestTimes { start: 0, finish: 5 });
    }

    #[test]
    fn test_chain_propagates_backward() {
        let (graph, durations, earliest) = setup(
            &[("A", 2.0), ("B", 2.0), ("C", 2.0)],
            &[("A", "B"), ("B", "C")],
        );
        let times = backward_pass(&graph, &durations, &earliest).unwrap();

        assert_eq!(times["C"], LatestTimes { start: 4, finish: 6 });
        assert_eq!(times["B"], LatestTimes { start: 2, finish: 4 });
        assert_eq!(times["A"], LatestTimes { start: 0, finish: 2 });
    }

    #[test]
    fn test_split_takes_minimum_successor_start() {
        // A blocks both B (4d) and C (2d); both are leaves at finish 5.
        let (graph, durations, earliest) = setup(
            &[("A", 1.0), ("B", 4.0), ("C", 2.0)],
            &[("A", "B"), ("A", "C")],
        );
        let times = backward_pass(&graph, &durations, &earliest).unwrap();

        // B's latest start is 1, C's is 3; A must finish by min(1, 3).
        assert_eq!(times["B"].start, 1);
        assert_eq!(times["C"].start, 3);
        assert_eq!(times["A"], LatestTimes { start: 0, finish: 1 });
    }

    #[test]
    fn test_task_finalized_only_after_all_successors() {
        // Diamond: D must be finalized before B and C, and those before A.
        let (graph, durations, earliest) = setup(
            &[("A", 1.0), ("B", 4.0), ("C", 2.0), ("D", 1.0)],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        let times = backward_pass(&graph, &durations, &earliest).unwrap();

        assert_eq!(times["D"], LatestTimes { start: 5, finish: 6 });
        assert_eq!(times["B"], LatestTimes { start: 1, finish: 5 });
        assert_eq!(times["C"], LatestTimes { start: 3, finish: 5 });
        // A's latest finish is min(B.start, C.start) = 1.
        assert_eq!(times["A"], LatestTimes { start: 0, finish: 1 });
    }

    #[test]
    fn test_cycle_reports_members() {
        let tasks = vec![
            Task::new("A").with_effort_hours(8.0),
            Task::new("B").with_effort_hours(8.0),
        ];
        let edges = vec![
            DependencyEdge::blocks("E1", "A", "B"),
            DependencyEdge::blocks("E2", "B", "A"),
        ];
        let graph = DependencyGraph::build(&tasks, &edges);
        let durations = duration_map(&tasks);

        let err = backward_pass(&graph, &durations, &HashMap::new()).unwrap_err();
        assert_eq!(err.task_ids, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_graph() {
        let (graph, durations, earliest) = setup(&[], &[]);
        let times = backward_pass(&graph, &durations, &earliest).unwrap();
        assert!(times.is_empty());
    }
}
