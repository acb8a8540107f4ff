//! Computed schedule model.
//!
//! `CpmSchedule` is the solution produced by one engine invocation:
//! per-task earliest/latest times, the ordered critical path, and the
//! overall project duration. It is pure derived state, recomputed from
//! scratch on every call and never persisted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Earliest/latest feasible times for one task.
///
/// All values are whole-day offsets from project start (day 0),
/// consistent within one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTiming {
    /// Earliest day the task can start.
    pub earliest_start: i64,
    /// Earliest day the task can finish.
    pub earliest_finish: i64,
    /// Latest day the task can start without delaying the project.
    pub latest_start: i64,
    /// Latest day the task can finish without delaying the project.
    pub latest_finish: i64,
    /// Whether the task lies on the critical path (zero slack).
    pub is_critical: bool,
}

impl ScheduleTiming {
    /// Slack (float): how far the task can shift without delaying the
    /// project. Zero for critical tasks.
    pub fn slack_days(&self) -> i64 {
        self.latest_start - self.earliest_start
    }
}

/// A computed schedule: the result of the forward/backward passes and
/// critical path extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpmSchedule {
    /// Per-task timings, keyed by task ID.
    pub timings: HashMap<String, ScheduleTiming>,
    /// Critical-path task IDs, ordered by earliest start.
    pub critical_path: Vec<String>,
    /// Total project duration in days (max earliest finish).
    pub project_duration_days: i64,
}

impl CpmSchedule {
    /// Timing for a task, if it was part of the computation.
    pub fn timing(&self, task_id: &str) -> Option<&ScheduleTiming> {
        self.timings.get(task_id)
    }

    /// Slack for a task, if known.
    pub fn slack_days(&self, task_id: &str) -> Option<i64> {
        self.timings.get(task_id).map(ScheduleTiming::slack_days)
    }

    /// Whether a task lies on the critical path.
    pub fn is_critical(&self, task_id: &str) -> bool {
        self.timings.get(task_id).is_some_and(|t| t.is_critical)
    }

    /// Number of scheduled tasks.
    pub fn task_count(&self) -> usize {
        self.timings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(es: i64, ef: i64, ls: i64, lf: i64, critical: bool) -> ScheduleTiming {
        ScheduleTiming {
            earliest_start: es,
            earliest_finish: ef,
            latest_start: ls,
            latest_finish: lf,
            is_critical: critical,
        }
    }

    fn sample_schedule() -> CpmSchedule {
        let mut timings = HashMap::new();
        timings.insert("A".to_string(), timing(0, 2, 0, 2, true));
        timings.insert("B".to_string(), timing(0, 1, 3, 4, false));
        CpmSchedule {
            timings,
            critical_path: vec!["A".to_string()],
            project_duration_days: 2,
        }
    }

    #[test]
    fn test_slack_days() {
        let s = sample_schedule();
        assert_eq!(s.slack_days("A"), Some(0));
        assert_eq!(s.slack_days("B"), Some(3));
        assert_eq!(s.slack_days("missing"), None);
    }

    #[test]
    fn test_is_critical() {
        let s = sample_schedule();
        assert!(s.is_critical("A"));
        assert!(!s.is_critical("B"));
        assert!(!s.is_critical("missing"));
    }

    #[test]
    fn test_timing_lookup() {
        let s = sample_schedule();
        assert_eq!(s.timing("A").unwrap().earliest_finish, 2);
        assert!(s.timing("missing").is_none());
        assert_eq!(s.task_count(), 2);
    }

    #[test]
    fn test_empty_schedule_default() {
        let s = CpmSchedule::default();
        assert_eq!(s.task_count(), 0);
        assert!(s.critical_path.is_empty());
        assert_eq!(s.project_duration_days, 0);
    }
}
