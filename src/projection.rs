//! Timeline projection.
//!
//! Maps tasks, accepted dependencies, and a critical-path ID set into
//! the bar/link representation consumed by a rendering layer. The
//! projection is decoupled from the scheduling passes: callers may feed
//! it a precomputed critical path, or use [`project_schedule`] to run
//! both in one call.
//!
//! # Bar date resolution
//!
//! The engine has no clock, so the caller supplies an `anchor` date
//! (the project start) for tasks without explicit dates:
//! - both dates present → the task's actual range (ordered),
//! - start only → `start + duration`,
//! - due only → `due - duration`,
//! - neither → `[anchor, anchor + duration)`.

use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

use crate::cpm::{compute_schedule, CyclicDependencyError};
use crate::graph::DependencyGraph;
use crate::models::{
    CpmSchedule, DependencyEdge, LinkKind, Task, Timeline, TimelineBar, TimelineLink,
};

/// Projects tasks and edges into timeline bars and links.
///
/// One bar per task (input order), one link per accepted `blocks` edge.
/// Edge filtering matches the graph builder: non-`blocks`, dangling,
/// self-loop, and duplicate edges produce no link. Bars whose task ID is
/// in `critical_path` are flagged for downstream highlighting.
pub fn project_timeline(
    tasks: &[Task],
    edges: &[DependencyEdge],
    critical_path: &[String],
    anchor: NaiveDate,
) -> Timeline {
    let critical: HashSet<&str> = critical_path.iter().map(String::as_str).collect();
    let graph = DependencyGraph::build(tasks, edges);

    let bars = tasks
        .iter()
        .map(|task| {
            let duration = task.duration_days();
            let (start_date, end_date) = bar_range(task, duration, anchor);
            TimelineBar {
                id: task.id.clone(),
                label: task.title.clone(),
                start_date,
                end_date,
                duration_days: duration,
                progress_ratio: task.status.progress_ratio(),
                parent_id: task.parent_id.clone(),
                is_critical: critical.contains(task.id.as_str()),
            }
        })
        .collect();

    let links = graph
        .accepted_edges()
        .iter()
        .map(|edge| TimelineLink {
            id: edge.id.clone(),
            source_task_id: edge.blocker_task_id.clone(),
            target_task_id: edge.dependent_task_id.clone(),
            relation_kind: LinkKind::FinishToStart,
        })
        .collect();

    Timeline { bars, links }
}

/// Runs the scheduling passes and projects the result in one call.
///
/// # Errors
///
/// [`CyclicDependencyError`] if the `blocks` edges form a cycle.
pub fn project_schedule(
    tasks: &[Task],
    edges: &[DependencyEdge],
    anchor: NaiveDate,
) -> Result<(CpmSchedule, Timeline), CyclicDependencyError> {
    let schedule = compute_schedule(tasks, edges)?;
    let timeline = project_timeline(tasks, edges, &schedule.critical_path, anchor);
    Ok((schedule, timeline))
}

fn bar_range(task: &Task, duration_days: i64, anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let span = Duration::days(duration_days);
    match (task.start_at, task.due_at) {
        (Some(start), Some(due)) => {
            let start = start.date_naive();
            let due = due.date_naive();
            (start.min(due), start.max(due))
        }
        (Some(start), None) => {
            let start = start.date_naive();
            (start, start + span)
        }
        (None, Some(due)) => {
            let due = due.date_naive();
            (due - span, due)
        }
        (None, None) => (anchor, anchor + span),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DependencyKind, TaskStatus};
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn anchor() -> NaiveDate {
        date(2025, 3, 1)
    }

    #[test]
    fn test_bar_uses_actual_date_range() {
        let tasks = vec![Task::new("A")
            .with_title("Dated")
            .with_start_at(Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap())
            .with_due_at(Utc.with_ymd_and_hms(2025, 3, 7, 17, 0, 0).unwrap())];

        let timeline = project_timeline(&tasks, &[], &[], anchor());
        let bar = timeline.bar("A").unwrap();
        assert_eq!(bar.start_date, date(2025, 3, 3));
        assert_eq!(bar.end_date, date(2025, 3, 7));
        assert_eq!(bar.label, "Dated");
        assert_eq!(bar.duration_days, 5);
    }

    #[test]
    fn test_bar_start_only_extends_by_duration() {
        let tasks = vec![Task::new("A")
            .with_start_at(Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap())
            .with_effort_hours(24.0)];

        let timeline = project_timeline(&tasks, &[], &[], anchor());
        let bar = timeline.bar("A").unwrap();
        assert_eq!(bar.start_date, date(2025, 3, 3));
        assert_eq!(bar.end_date, date(2025, 3, 6));
    }

    #[test]
    fn test_bar_due_only_backs_off_by_duration() {
        let tasks = vec![Task::new("A")
            .with_due_at(Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap())
            .with_effort_hours(16.0)];

        let timeline = project_timeline(&tasks, &[], &[], anchor());
        let bar = timeline.bar("A").unwrap();
        assert_eq!(bar.start_date, date(2025, 3, 8));
        assert_eq!(bar.end_date, date(2025, 3, 10));
    }

    #[test]
    fn test_dateless_bar_anchors_at_project_start() {
        let tasks = vec![Task::new("A")];

        let timeline = project_timeline(&tasks, &[], &[], anchor());
        let bar = timeline.bar("A").unwrap();
        assert_eq!(bar.start_date, date(2025, 3, 1));
        assert_eq!(bar.end_date, date(2025, 3, 2));
        assert_eq!(bar.duration_days, 1);
    }

    #[test]
    fn test_progress_from_status() {
        let tasks = vec![
            Task::new("A").with_status(TaskStatus::Done),
            Task::new("B").with_status(TaskStatus::Review),
            Task::new("C").with_status(TaskStatus::Blocked),
        ];

        let timeline = project_timeline(&tasks, &[], &[], anchor());
        assert_eq!(timeline.bar("A").unwrap().progress_ratio, 1.0);
        assert_eq!(timeline.bar("B").unwrap().progress_ratio, 0.75);
        assert_eq!(timeline.bar("C").unwrap().progress_ratio, 0.0);
    }

    #[test]
    fn test_critical_flagging() {
        let tasks = vec![Task::new("A"), Task::new("B")];
        let critical = vec!["B".to_string()];

        let timeline = project_timeline(&tasks, &[], &critical, anchor());
        assert!(!timeline.bar("A").unwrap().is_critical);
        assert!(timeline.bar("B").unwrap().is_critical);
        assert_eq!(timeline.critical_bar_ids(), vec!["B"]);
    }

    #[test]
    fn test_links_only_from_accepted_edges() {
        let tasks = vec![Task::new("A"), Task::new("B")];
        let edges = vec![
            DependencyEdge::blocks("E1", "A", "B"),
            DependencyEdge::blocks("E2", "A", "GHOST"),
            DependencyEdge::blocks("E3", "B", "B"),
            DependencyEdge::blocks("E4", "B", "A").with_kind(DependencyKind::RelatesTo),
        ];

        let timeline = project_timeline(&tasks, &edges, &[], anchor());
        assert_eq!(timeline.links.len(), 1);
        let link = &timeline.links[0];
        assert_eq!(link.id, "E1");
        assert_eq!(link.source_task_id, "A");
        assert_eq!(link.target_task_id, "B");
        assert_eq!(link.relation_kind, LinkKind::FinishToStart);
    }

    #[test]
    fn test_parent_carried_through() {
        let tasks = vec![Task::new("A").with_parent("EPIC")];
        let timeline = project_timeline(&tasks, &[], &[], anchor());
        assert_eq!(timeline.bar("A").unwrap().parent_id.as_deref(), Some("EPIC"));
    }

    #[test]
    fn test_project_schedule_end_to_end() {
        let tasks = vec![
            Task::new("A").with_effort_hours(16.0),
            Task::new("B").with_effort_hours(16.0),
            Task::new("C").with_effort_hours(8.0),
        ];
        let edges = vec![DependencyEdge::blocks("E1", "A", "B")];

        let (schedule, timeline) = project_schedule(&tasks, &edges, anchor()).unwrap();
        assert_eq!(schedule.critical_path, vec!["A", "B"]);
        assert_eq!(timeline.critical_bar_ids(), vec!["A", "B"]);
        assert_eq!(timeline.bars.len(), 3);
        assert_eq!(timeline.links.len(), 1);
    }

    #[test]
    fn test_project_schedule_propagates_cycle_error() {
        let tasks = vec![Task::new("A"), Task::new("B")];
        let edges = vec![
            DependencyEdge::blocks("E1", "A", "B"),
            DependencyEdge::blocks("E2", "B", "A"),
        ];

        let err = project_schedule(&tasks, &edges, anchor()).unwrap_err();
        assert_eq!(err.task_ids, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_input() {
        let timeline = project_timeline(&[], &[], &[], anchor());
        assert!(timeline.bars.is_empty());
        assert!(timeline.links.is_empty());
    }
}
