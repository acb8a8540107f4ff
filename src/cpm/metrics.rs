//! Schedule summary metrics.
//!
//! Aggregates a computed schedule into reporting figures.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Project Duration | Max earliest finish over all tasks |
//! | Critical Count | Tasks with zero slack |
//! | Critical Ratio | Critical count / task count |
//! | Total Slack | Sum of per-task slack |
//! | Max Slack | Largest single slack |
//! | Avg Slack | Mean per-task slack |

use serde::{Deserialize, Serialize};

use crate::models::CpmSchedule;

/// Summary figures for a computed schedule.
///
/// All slack values are in whole days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Total project duration in days.
    pub project_duration_days: i64,
    /// Number of scheduled tasks.
    pub task_count: usize,
    /// Number of tasks on the critical path.
    pub critical_task_count: usize,
    /// Fraction of tasks that are critical (0.0..1.0). Zero for an
    /// empty schedule.
    pub critical_ratio: f64,
    /// Sum of slack across all tasks (days).
    pub total_slack_days: i64,
    /// Largest slack of any single task (days).
    pub max_slack_days: i64,
    /// Mean slack per task (days). Zero for an empty schedule.
    pub avg_slack_days: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule.
    pub fn calculate(schedule: &CpmSchedule) -> Self {
        let task_count = schedule.task_count();
        let mut critical_task_count = 0;
        let mut total_slack: i64 = 0;
        let mut max_slack: i64 = 0;

        for timing in schedule.timings.values() {
            if timing.is_critical {
                critical_task_count += 1;
            }
            let slack = timing.slack_days();
            total_slack += slack;
            max_slack = max_slack.max(slack);
        }

        let (critical_ratio, avg_slack_days) = if task_count > 0 {
            (
                critical_task_count as f64 / task_count as f64,
                total_slack as f64 / task_count as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            project_duration_days: schedule.project_duration_days,
            task_count,
            critical_task_count,
            critical_ratio,
            total_slack_days: total_slack,
            max_slack_days: max_slack,
            avg_slack_days,
        }
    }
}
