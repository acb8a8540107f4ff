//! Dependency edge model.
//!
//! A dependency edge is a directed relationship between two tasks,
//! supplied as a flat record by the surrounding CRUD system. Only the
//! `Blocks` kind participates in scheduling; other kinds are carried
//! for completeness and ignored by the engine.

use serde::{Deserialize, Serialize};

/// Kind of relationship between two tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    /// Finish-to-start constraint: the blocker must finish before the
    /// dependent starts. The only kind honored by the scheduling passes.
    #[default]
    Blocks,
    /// Informational association with no scheduling semantics.
    RelatesTo,
    /// Marks the dependent as a duplicate of the blocker.
    Duplicates,
}

impl DependencyKind {
    /// Whether edges of this kind constrain the schedule.
    pub fn is_scheduling(self) -> bool {
        self == DependencyKind::Blocks
    }
}

/// A directed dependency between two tasks.
///
/// For a `Blocks` edge, `blocker_task_id` must finish before
/// `dependent_task_id` can start (finish-to-start).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Unique edge identifier.
    pub id: String,
    /// Task that must finish first.
    pub blocker_task_id: String,
    /// Task that waits on the blocker.
    pub dependent_task_id: String,
    /// Relationship kind.
    pub kind: DependencyKind,
}

impl DependencyEdge {
    /// Creates a `Blocks` edge: `blocker` must finish before `dependent` starts.
    pub fn blocks(
        id: impl Into<String>,
        blocker: impl Into<String>,
        dependent: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            blocker_task_id: blocker.into(),
            dependent_task_id: dependent.into(),
            kind: DependencyKind::Blocks,
        }
    }

    /// Sets the relationship kind.
    pub fn with_kind(mut self, kind: DependencyKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this edge is a self-loop (blocker == dependent).
    pub fn is_self_loop(&self) -> bool {
        self.blocker_task_id == self.dependent_task_id
    }
}
