//! Horse roster entity and status vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::filter::{Categorized, TextSearchable};
use crate::types::{CalendarDate, EntityId, Identified};

/// A horse in the shelter roster.
///
/// Roster records are read-only in the current scope; profile and note
/// edits happen elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    pub id: EntityId,
    pub name: String,
    pub breed: String,
    pub age: u32,
    pub gender: Gender,
    pub status: HorseStatus,
    pub location: String,
    pub arrival_date: CalendarDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub color: String,
}

impl Identified for Horse {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The roster search box matches against name and breed.
impl TextSearchable for Horse {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.breed]
    }
}

impl Categorized for Horse {
    type Category = HorseStatus;

    fn category(&self) -> HorseStatus {
        self.status
    }
}

/// Horse sex/neuter classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Mare,
    Stallion,
    Gelding,
}

/// Care status; drives both the roster filter buttons and the badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorseStatus {
    Healthy,
    Treatment,
    Observation,
}

impl HorseStatus {
    /// All statuses, in display order.
    pub const ALL: [Self; 3] = [Self::Healthy, Self::Observation, Self::Treatment];

    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Treatment => "treatment",
            Self::Observation => "observation",
        }
    }
}

impl fmt::Display for HorseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validate a horse record loaded from the data source.
pub fn validate_horse(horse: &Horse) -> Result<(), CoreError> {
    if horse.id.is_empty() {
        return Err(CoreError::Validation(
            "Horse id must not be empty".to_string(),
        ));
    }
    if horse.name.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Horse '{}' must have a name",
            horse.id
        )));
    }
    if horse.breed.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Horse '{}' must have a breed",
            horse.name
        )));
    }
    if horse.age == 0 {
        return Err(CoreError::Validation(format!(
            "Horse '{}' must have a positive age",
            horse.name
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
