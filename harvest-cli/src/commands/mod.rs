//! CLI command implementations

pub mod schedule;

pub use schedule::ScheduleArgs;
