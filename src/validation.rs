//! Input validation for scheduling snapshots.
//!
//! Optional pre-check for callers that want diagnostics instead of the
//! engine's silent recovery. The engine itself stays lenient: it drops
//! dangling and self-loop edges and defaults malformed durations. This
//! module reports those conditions, plus the ones the engine cannot
//! recover from:
//! - Duplicate task or edge IDs
//! - Edges referencing unknown tasks
//! - Self-dependencies
//! - Circular `blocks` dependencies (DAG validation)
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use crate::models::{DependencyEdge, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An edge references a task that doesn't exist.
    DanglingEdge,
    /// An edge's blocker and dependent are the same task.
    SelfDependency,
    /// The `blocks` graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task/edge snapshot before scheduling.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. No duplicate edge IDs
/// 3. All edge endpoints reference existing tasks
/// 4. No self-dependencies
/// 5. No circular `blocks` dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task], edges: &[DependencyEdge]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
    }

    let mut edge_ids = HashSet::new();
    for edge in edges {
        if !edge_ids.insert(edge.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate edge ID: {}", edge.id),
            ));
        }

        for endpoint in [&edge.blocker_task_id, &edge.dependent_task_id] {
            if !task_ids.contains(endpoint.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingEdge,
                    format!("Edge '{}' references unknown task '{}'", edge.id, endpoint),
                ));
            }
        }

        if edge.is_self_loop() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfDependency,
                format!(
                    "Edge '{}' makes task '{}' block itself",
                    edge.id, edge.blocker_task_id
                ),
            ));
        }
    }

    if let Some(cycle_err) = detect_cycles(&task_ids, edges) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the `blocks` graph using DFS.
///
/// Only edges the engine would accept are considered: `blocks` kind,
/// both endpoints known, not a self-loop. A back-edge (visiting a node
/// already in the recursion stack) means a cycle exists.
fn detect_cycles(task_ids: &HashSet<&str>, edges: &[DependencyEdge]) -> Option<ValidationError> {
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        if !edge.kind.is_scheduling() || edge.is_self_loop() {
            continue;
        }
        if !task_ids.contains(edge.blocker_task_id.as_str())
            || !task_ids.contains(edge.dependent_task_id.as_str())
        {
            continue;
        }
        adj.entry(edge.blocker_task_id.as_str())
            .or_default()
            .push(edge.dependent_task_id.as_str());
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &node in task_ids {
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving task '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
