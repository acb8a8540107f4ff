//! Dependency graph construction.
//!
//! Builds forward and reverse adjacency from flat task and edge lists.
//! The graph is an arena keyed by task ID: adjacency is stored as
//! ID-keyed maps of ID lists, with no object aliasing, so the traversal
//! passes can read it concurrently with their own result maps.
//!
//! # Edge filtering
//!
//! Only `blocks` edges enter the graph. Edges are silently discarded when:
//! - the kind is not `Blocks` (other kinds have no scheduling semantics),
//! - either endpoint is not a known task (stale references from the
//!   surrounding CRUD layer),
//! - blocker and dependent are the same task (self-loop),
//! - the same (blocker, dependent) pair was already accepted (duplicate
//!   records would skew degree counts).

use std::collections::{HashMap, HashSet};

use crate::models::{DependencyEdge, Task};

/// Forward/reverse adjacency over a task set.
///
/// Successor and predecessor lookups are O(1) per task; both scheduling
/// passes iterate them repeatedly.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    successors: HashMap<String, Vec<String>>,
    predecessors: HashMap<String, Vec<String>>,
    task_order: Vec<String>,
    accepted_edges: Vec<DependencyEdge>,
}

impl DependencyGraph {
    /// Builds a graph from task and edge snapshots.
    ///
    /// Every task becomes a node, including isolated ones. Duplicate task
    /// IDs keep their first occurrence (use [`crate::validation`] to
    /// surface duplicates as diagnostics).
    pub fn build(tasks: &[Task], edges: &[DependencyEdge]) -> Self {
        let mut successors: HashMap<String, Vec<String>> = HashMap::with_capacity(tasks.len());
        let mut predecessors: HashMap<String, Vec<String>> = HashMap::with_capacity(tasks.len());
        let mut task_order = Vec::with_capacity(tasks.len());

        for task in tasks {
            if successors.contains_key(&task.id) {
                continue;
            }
            successors.insert(task.id.clone(), Vec::new());
            predecessors.insert(task.id.clone(), Vec::new());
            task_order.push(task.id.clone());
        }

        let mut seen_pairs: HashSet<(&str, &str)> = HashSet::new();
        let mut accepted_edges = Vec::new();

        for edge in edges {
            if !edge.kind.is_scheduling() || edge.is_self_loop() {
                continue;
            }
            if !successors.contains_key(&edge.blocker_task_id)
                || !successors.contains_key(&edge.dependent_task_id)
            {
                continue;
            }
            if !seen_pairs.insert((
                edge.blocker_task_id.as_str(),
                edge.dependent_task_id.as_str(),
            )) {
                continue;
            }

            if let Some(succ) = successors.get_mut(&edge.blocker_task_id) {
                succ.push(edge.dependent_task_id.clone());
            }
            if let Some(pred) = predecessors.get_mut(&edge.dependent_task_id) {
                pred.push(edge.blocker_task_id.clone());
            }
            accepted_edges.push(edge.clone());
        }

        Self {
            successors,
            predecessors,
            task_order,
            accepted_edges,
        }
    }

    /// Tasks that depend on `task_id` (must start after it finishes).
    pub fn successors(&self, task_id: &str) -> &[String] {
        self.successors
            .get(task_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tasks that `task_id` depends on (must finish before it starts).
    pub fn predecessors(&self, task_id: &str) -> &[String] {
        self.predecessors
            .get(task_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of predecessors.
    pub fn in_degree(&self, task_id: &str) -> usize {
        self.predecessors(task_id).len()
    }

    /// Number of successors.
    pub fn out_degree(&self, task_id: &str) -> usize {
        self.successors(task_id).len()
    }

    /// Whether the task is a node in this graph.
    pub fn contains(&self, task_id: &str) -> bool {
        self.successors.contains_key(task_id)
    }

    /// Task IDs in input order. Used for deterministic tie-breaking.
    pub fn task_order(&self) -> &[String] {
        &self.task_order
    }

    /// Number of tasks (nodes).
    pub fn task_count(&self) -> usize {
        self.task_order.len()
    }

    /// The `blocks` edges that survived filtering, in input order.
    pub fn accepted_edges(&self) -> &[DependencyEdge] {
        &self.accepted_edges
    }
}
