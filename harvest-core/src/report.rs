//! Schedule report output

use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::planting::HarvestRecord;
use crate::schedule::{Schedule, ScheduleFailure};
use crate::table::render_schedule;
use crate::{Error, Result};

/// Label line printed above the schedule
pub const SCHEDULE_LABEL: &str = "--- Harvest Planning Schedule ---";

/// Hint printed after a plant date diagnostic
pub const DATE_FORMAT_HINT: &str = "Please ensure the date format is YYYY-MM-DD.";

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Diagnostics followed by an aligned text table
    #[default]
    Table,
    /// A single JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!("Unknown output format: {}", other))),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    harvests: &'a [HarvestRecord],
    failures: Vec<JsonFailure<'a>>,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    index: usize,
    crop: &'a str,
    error: String,
}

impl<'a> From<&'a ScheduleFailure> for JsonFailure<'a> {
    fn from(failure: &'a ScheduleFailure) -> Self {
        Self {
            index: failure.index,
            crop: &failure.crop,
            error: failure.error.to_string(),
        }
    }
}

/// Write the schedule report in the requested format
pub fn write_report<W: Write>(out: &mut W, schedule: &Schedule, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_table_report(out, schedule),
        OutputFormat::Json => write_json_report(out, schedule),
    }
}

fn write_table_report<W: Write>(out: &mut W, schedule: &Schedule) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", SCHEDULE_LABEL)?;

    for failure in &schedule.failures {
        writeln!(out, "{}", failure)?;
        if matches!(failure.error, Error::DateParse { .. }) {
            writeln!(out, "{}", DATE_FORMAT_HINT)?;
        }
    }

    for line in render_schedule(&schedule.harvests) {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

fn write_json_report<W: Write>(out: &mut W, schedule: &Schedule) -> Result<()> {
    let report = JsonReport {
        harvests: &schedule.harvests,
        failures: schedule.failures.iter().map(JsonFailure::from).collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
