//! Harvest Core - Harvest date scheduling
//!
//! This crate computes estimated harvest dates from plant dates and days to
//! maturity, and renders the resulting schedule as an aligned text table.

pub mod config;
pub mod error;
pub mod input;
pub mod planting;
pub mod report;
pub mod schedule;
pub mod table;

pub use config::Config;
pub use error::{Error, Result};
pub use input::load_plantings;
pub use planting::{demo_plantings, HarvestRecord, PlantingRecord, RawPlanting};
pub use report::{write_report, OutputFormat};
pub use schedule::{calculate_schedule, Schedule, ScheduleCalculator, ScheduleFailure};
pub use table::{render_schedule, Align, Column, Table};
