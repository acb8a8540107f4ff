//! Scheduling domain models.
//!
//! Input types (`Task`, `DependencyEdge`) mirror the records supplied by
//! the surrounding persistence layer; output types (`CpmSchedule`,
//! `Timeline`) are what the engine hands to a rendering layer. All types
//! are plain serializable data with no behavior beyond derivation helpers.

mod dependency;
mod task;
mod timeline;
mod timing;

pub use dependency::{DependencyEdge, DependencyKind};
pub use task::{Task, TaskStatus};
pub use timeline::{LinkKind, Timeline, TimelineBar, TimelineLink};
pub use timing::{CpmSchedule, ScheduleTiming};
