//! Harvest schedule calculation
//!
//! Turns planting records into harvest records by adding the days to
//! maturity to the plant date. Records that cannot be scheduled are
//! dropped from the output and collected as failures instead, so one bad
//! entry never stops the rest of the schedule.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

use crate::planting::{HarvestRecord, PlantingRecord, RawPlanting};
use crate::{Error, Result};

/// Date pattern for plant and harvest dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years that format as four digits without a sign
const FOUR_DIGIT_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parse a plant date in strict `YYYY-MM-DD` form.
///
/// The year must be four digits and the month and day two digits each; the
/// result must be a real calendar date (`2025-02-30` is rejected).
pub fn parse_plant_date(input: &str) -> Result<NaiveDate> {
    let parse_error = |reason: &str| Error::DateParse {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(parse_error("expected format YYYY-MM-DD"));
    }

    let date =
        NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|e| parse_error(&e.to_string()))?;
    if !FOUR_DIGIT_YEARS.contains(&date.year()) {
        return Err(parse_error("year must be between 0001 and 9999"));
    }
    Ok(date)
}

/// Advance `date` by `dtm` calendar days. Negative values move backwards.
///
/// Returns `None` when the result falls outside `0001-01-01..=9999-12-31`.
pub fn harvest_date(date: NaiveDate, dtm: i64) -> Option<NaiveDate> {
    let days = Days::new(dtm.unsigned_abs());
    let harvested = if dtm >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }?;
    FOUR_DIGIT_YEARS
        .contains(&harvested.year())
        .then_some(harvested)
}

/// A planting record that produced no harvest record
#[derive(Debug)]
pub struct ScheduleFailure {
    /// Position of the record in the input sequence
    pub index: usize,
    /// Crop display name
    pub crop: String,
    /// Why the record was dropped
    pub error: Error,
}

impl fmt::Display for ScheduleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error processing data for {}: {}", self.crop, self.error)
    }
}

/// Outcome of scheduling a list of plantings
#[derive(Debug, Default)]
pub struct Schedule {
    /// Harvest records in input order
    pub harvests: Vec<HarvestRecord>,
    /// Dropped records in input order
    pub failures: Vec<ScheduleFailure>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.harvests.is_empty() && self.failures.is_empty()
    }

    fn record(&mut self, index: usize, crop: &str, outcome: Result<HarvestRecord>) {
        match outcome {
            Ok(harvest) => self.harvests.push(harvest),
            Err(error) => {
                tracing::warn!(index, crop = %crop, error = %error, "Dropping planting record");
                self.failures.push(ScheduleFailure {
                    index,
                    crop: crop.to_string(),
                    error,
                });
            }
        }
    }
}

/// Computes harvest dates for planting records
#[derive(Debug, Clone, Copy)]
pub struct ScheduleCalculator {
    /// Accept negative days to maturity (producing a date before planting)
    pub allow_negative_dtm: bool,
}

impl Default for ScheduleCalculator {
    fn default() -> Self {
        Self {
            allow_negative_dtm: true,
        }
    }
}

impl ScheduleCalculator {
    pub fn new(allow_negative_dtm: bool) -> Self {
        Self { allow_negative_dtm }
    }

    /// Compute the harvest record for a single planting
    pub fn harvest_for(&self, planting: &PlantingRecord) -> Result<HarvestRecord> {
        if planting.dtm < 0 && !self.allow_negative_dtm {
            return Err(Error::NegativeDtm { dtm: planting.dtm });
        }

        let planted = parse_plant_date(&planting.plant_date)?;
        let harvested =
            harvest_date(planted, planting.dtm).ok_or_else(|| Error::DateOutOfRange {
                plant_date: planting.plant_date.clone(),
                dtm: planting.dtm,
            })?;

        Ok(HarvestRecord {
            crop: planting.crop.clone(),
            plant_date: planting.plant_date.clone(),
            dtm: planting.dtm,
            harvest_date: harvested.format(DATE_FORMAT).to_string(),
        })
    }

    /// Schedule every planting, keeping input order
    pub fn calculate(&self, plantings: &[PlantingRecord]) -> Schedule {
        let mut schedule = Schedule::default();
        for (index, planting) in plantings.iter().enumerate() {
            schedule.record(index, &planting.crop, self.harvest_for(planting));
        }
        log_summary(&schedule);
        schedule
    }

    /// Validate and schedule raw input entries, keeping input order
    ///
    /// Entries with missing fields are reported alongside date failures.
    pub fn calculate_raw(&self, entries: Vec<RawPlanting>) -> Schedule {
        let mut schedule = Schedule::default();
        for (index, entry) in entries.into_iter().enumerate() {
            let crop = entry.display_name().to_string();
            let outcome = entry
                .validate()
                .and_then(|planting| self.harvest_for(&planting));
            schedule.record(index, &crop, outcome);
        }
        log_summary(&schedule);
        schedule
    }
}

/// Schedule plantings with the default (permissive) calculator
pub fn calculate_schedule(plantings: &[PlantingRecord]) -> Schedule {
    ScheduleCalculator::default().calculate(plantings)
}

fn log_summary(schedule: &Schedule) {
    tracing::debug!(
        scheduled = schedule.harvests.len(),
        dropped = schedule.failures.len(),
        "Harvest schedule calculated"
    );
}
