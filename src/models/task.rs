//! Task model and duration estimation.
//!
//! A task is the unit of scheduling: an optionally dated, optionally
//! estimated piece of work supplied by the surrounding CRUD system.
//! The engine treats each task as an immutable snapshot for the duration
//! of one computation.
//!
//! # Duration Model
//!
//! Every task has a derivable whole-day duration of at least one day,
//! even on incomplete data:
//! 1. Explicit `start_at`/`due_at` range → calendar span, rounded up.
//! 2. Effort estimate → `estimated_effort_hours` at 8 hours per working day.
//! 3. Neither → single-day placeholder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;
const HOURS_PER_DAY: f64 = 8.0;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not yet started.
    #[default]
    New,
    /// Actively being worked.
    InProgress,
    /// Work finished, awaiting review.
    Review,
    /// Completed.
    Done,
    /// Waiting on something external.
    Blocked,
}

impl TaskStatus {
    /// Completion ratio for timeline rendering, in `[0, 1]`.
    ///
    /// Fixed mapping: `New` → 0.0, `InProgress` → 0.5, `Review` → 0.75,
    /// `Done` → 1.0, `Blocked` → 0.0.
    pub fn progress_ratio(self) -> f64 {
        match self {
            TaskStatus::New | TaskStatus::Blocked => 0.0,
            TaskStatus::InProgress => 0.5,
            TaskStatus::Review => 0.75,
            TaskStatus::Done => 1.0,
        }
    }
}

/// A task to be scheduled.
///
/// Dates and effort are optional: end users routinely enter partial data,
/// and the engine degrades to defaults instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Planned start timestamp. `None` = not yet dated.
    pub start_at: Option<DateTime<Utc>>,
    /// Planned due timestamp. `None` = no due date.
    pub due_at: Option<DateTime<Utc>>,
    /// Effort estimate in hours. `None` = not estimated.
    pub estimated_effort_hours: Option<f64>,
    /// Workflow status.
    pub status: TaskStatus,
    /// Parent task for hierarchical grouping. Not used by the scheduling
    /// math itself; carried through to the timeline projection.
    pub parent_id: Option<String>,
}

impl Task {
    /// Creates a new task with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            start_at: None,
            due_at: None,
            estimated_effort_hours: None,
            status: TaskStatus::New,
            parent_id: None,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the planned start timestamp.
    pub fn with_start_at(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = Some(start_at);
        self
    }

    /// Sets the due timestamp.
    pub fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Sets the effort estimate in hours.
    pub fn with_effort_hours(mut self, hours: f64) -> Self {
        self.estimated_effort_hours = Some(hours);
        self
    }

    /// Sets the workflow status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the parent task ID.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Estimated duration in whole days, always at least 1.
    ///
    /// Resolution order:
    /// 1. Both dates present → `ceil(|due_at - start_at|)` in days, clamped to 1.
    /// 2. Effort present and positive → `ceil(hours / 8)`, clamped to 1.
    /// 3. Otherwise → 1 (single-day placeholder).
    ///
    /// Malformed values (reversed dates, non-finite or non-positive effort)
    /// degrade to the next rule rather than erroring.
    pub fn duration_days(&self) -> i64 {
        if let (Some(start), Some(due)) = (self.start_at, self.due_at) {
            let span_secs = (due - start).num_seconds().abs();
            let days = (span_secs + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
            return days.max(1);
        }

        if let Some(hours) = self.estimated_effort_hours {
            if hours.is_finite() && hours > 0.0 {
                return (hours / HOURS_PER_DAY).ceil() as i64;
            }
        }

        1
    }
}
