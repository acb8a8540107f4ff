//! Timeline projection model.
//!
//! Generic bar/link representation of a schedule for a rendering layer
//! (e.g., a Gantt-style view). The engine only defines the data shape;
//! drawing, colors, and interaction belong to the UI collaborator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of link between two bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Source must finish before target starts. The only kind the
    /// engine produces.
    #[default]
    FinishToStart,
}

/// One task rendered as a dated bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBar {
    /// Task ID this bar represents.
    pub id: String,
    /// Display label (task title).
    pub label: String,
    /// Bar start date (inclusive).
    pub start_date: NaiveDate,
    /// Bar end date (exclusive).
    pub end_date: NaiveDate,
    /// Task duration in whole days.
    pub duration_days: i64,
    /// Completion ratio in `[0, 1]`, derived from task status.
    pub progress_ratio: f64,
    /// Parent task for hierarchical grouping, if any.
    pub parent_id: Option<String>,
    /// Whether the task lies on the critical path. Carries no semantics
    /// inside the engine; downstream highlighting only.
    pub is_critical: bool,
}

/// One accepted dependency rendered as a directional link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineLink {
    /// Edge ID this link represents.
    pub id: String,
    /// Blocker task ID.
    pub source_task_id: String,
    /// Dependent task ID.
    pub target_task_id: String,
    /// Relationship kind.
    pub relation_kind: LinkKind,
}

/// A complete timeline projection: one bar per task, one link per
/// accepted `blocks` edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Bars, in input task order.
    pub bars: Vec<TimelineBar>,
    /// Links, in input edge order.
    pub links: Vec<TimelineLink>,
}

impl Timeline {
    /// Finds the bar for a task.
    pub fn bar(&self, task_id: &str) -> Option<&TimelineBar> {
        self.bars.iter().find(|b| b.id == task_id)
    }

    /// IDs of bars flagged as critical.
    pub fn critical_bar_ids(&self) -> Vec<&str> {
        self.bars
            .iter()
            .filter(|b| b.is_critical)
            .map(|b| b.id.as_str())
            .collect()
    }
}
