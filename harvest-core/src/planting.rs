//! Planting and harvest records

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Display name used when an input entry has no crop name
pub const UNNAMED_CROP: &str = "<unnamed>";

/// A single planting: what was sown, when, and how long it takes to mature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantingRecord {
    /// Crop display name (not unique, e.g. succession batches)
    pub crop: String,
    /// Plant date as `YYYY-MM-DD`
    pub plant_date: String,
    /// Days to maturity
    pub dtm: i64,
}

impl PlantingRecord {
    pub fn new(crop: impl Into<String>, plant_date: impl Into<String>, dtm: i64) -> Self {
        Self {
            crop: crop.into(),
            plant_date: plant_date.into(),
            dtm,
        }
    }
}

/// A planting entry as read from an input file, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlanting {
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub plant_date: Option<String>,
    #[serde(default)]
    pub dtm: Option<i64>,
}

impl RawPlanting {
    /// Crop name for display, falling back to [`UNNAMED_CROP`]
    pub fn display_name(&self) -> &str {
        self.crop.as_deref().unwrap_or(UNNAMED_CROP)
    }

    /// Check required fields and convert into a [`PlantingRecord`]
    pub fn validate(self) -> Result<PlantingRecord> {
        let crop = self.crop.unwrap_or_else(|| UNNAMED_CROP.to_string());
        let plant_date = self
            .plant_date
            .ok_or(Error::MissingField { field: "plant_date" })?;
        let dtm = self.dtm.ok_or(Error::MissingField { field: "dtm" })?;

        Ok(PlantingRecord {
            crop,
            plant_date,
            dtm,
        })
    }
}

impl From<PlantingRecord> for RawPlanting {
    fn from(record: PlantingRecord) -> Self {
        Self {
            crop: Some(record.crop),
            plant_date: Some(record.plant_date),
            dtm: Some(record.dtm),
        }
    }
}

/// A planting with its estimated harvest date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestRecord {
    pub crop: String,
    /// Plant date, echoed verbatim from the input
    pub plant_date: String,
    pub dtm: i64,
    /// Estimated harvest date as `YYYY-MM-DD`
    pub harvest_date: String,
}

/// Built-in demo plantings used when no input file is given
pub fn demo_plantings() -> Vec<PlantingRecord> {
    vec![
        // Succession planting: same crop, staggered dates
        PlantingRecord::new("Lettuce (Batch 1)", "2025-05-01", 45),
        PlantingRecord::new("Lettuce (Batch 2)", "2025-05-15", 45),
        PlantingRecord::new("Tomatoes", "2025-04-15", 75),
        PlantingRecord::new("Carrots", "2025-05-05", 60),
        PlantingRecord::new("Radishes", "2025-05-10", 30),
        PlantingRecord::new("Winter Squash", "2025-06-01", 90),
    ]
}
