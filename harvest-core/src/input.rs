//! Loading planting lists from files
//!
//! JSON files hold an array of entries or an object with a `plantings`
//! array. TOML files hold `[[planting]]` tables:
//!
//! ```toml
//! [[planting]]
//! crop = "Tomatoes"
//! plant_date = "2025-04-15"
//! dtm = 75
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::planting::RawPlanting;
use crate::{Error, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPlantings {
    List(Vec<RawPlanting>),
    Wrapped { plantings: Vec<RawPlanting> },
}

#[derive(Deserialize)]
struct TomlPlantings {
    #[serde(default)]
    planting: Vec<RawPlanting>,
}

/// Load planting entries from a `.json` or `.toml` file
pub fn load_plantings(path: &Path) -> Result<Vec<RawPlanting>> {
    let contents = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let entries = match extension.as_deref() {
        Some("json") => parse_json_plantings(&contents)?,
        Some("toml") => parse_toml_plantings(&contents)?,
        _ => {
            return Err(Error::Input(format!(
                "Unsupported planting file (expected .json or .toml): {}",
                path.display()
            )))
        }
    };

    tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded plantings");
    Ok(entries)
}

/// Parse planting entries from JSON text
pub fn parse_json_plantings(contents: &str) -> Result<Vec<RawPlanting>> {
    Ok(match serde_json::from_str(contents)? {
        JsonPlantings::List(entries) => entries,
        JsonPlantings::Wrapped { plantings } => plantings,
    })
}

/// Parse planting entries from TOML text
pub fn parse_toml_plantings(contents: &str) -> Result<Vec<RawPlanting>> {
    let parsed: TomlPlantings = toml::from_str(contents)?;
    Ok(parsed.planting)
}
