//! Task-dependency scheduling engine.
//!
//! Given a snapshot of tasks and directed `blocks` relationships, computes
//! earliest/latest feasible times per task (critical path method), extracts
//! the critical path, and projects the result into a timeline bar/link
//! representation for a rendering layer. The engine is a pure library
//! boundary: synchronous, stateless, and side-effect-free — the surrounding
//! system supplies the records and consumes the outputs.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `DependencyEdge`, `CpmSchedule`,
//!   `ScheduleTiming`, `Timeline`, `TimelineBar`, `TimelineLink`
//! - **`graph`**: Dependency graph construction with defensive edge filtering
//! - **`cpm`**: Forward/backward passes, critical path extraction, metrics
//! - **`projection`**: Timeline projection for Gantt-style views
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling edges,
//!   DAG cycles)
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use cpm_engine::models::{DependencyEdge, Task};
//! use cpm_engine::projection::project_schedule;
//!
//! let tasks = vec![
//!     Task::new("design").with_title("Design").with_effort_hours(16.0),
//!     Task::new("build").with_title("Build").with_effort_hours(32.0),
//!     Task::new("docs").with_title("Docs").with_effort_hours(8.0),
//! ];
//! let edges = vec![DependencyEdge::blocks("e1", "design", "build")];
//! let anchor = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//!
//! let (schedule, timeline) = project_schedule(&tasks, &edges, anchor).unwrap();
//! assert_eq!(schedule.project_duration_days, 6);
//! assert_eq!(schedule.critical_path, vec!["design", "build"]);
//! assert_eq!(timeline.bars.len(), 3);
//! ```
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod cpm;
pub mod graph;
pub mod models;
pub mod projection;
pub mod validation;
