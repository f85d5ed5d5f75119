//! Embedded seed datasets and the data-loading boundary.
//!
//! The upstream app hard-coded these records inside its screens; here they
//! live in JSON behind [`load`] so the view-model layer stays testable
//! independent of data content, and a real loader can replace this module
//! without touching anything above it.

use std::collections::HashSet;

use haven_core::error::CoreError;
use haven_core::feeding::FeedingEntry;
use haven_core::health::{HealthRecord, VaccinationDue};
use haven_core::horse::{validate_horse, Horse};
use haven_core::profile::HorseDetail;

use crate::store::EntityStore;

const HORSES_JSON: &str = include_str!("../data/horses.json");
const HEALTH_RECORDS_JSON: &str = include_str!("../data/health_records.json");
const FEEDING_SCHEDULE_JSON: &str = include_str!("../data/feeding_schedule.json");
const HORSE_DETAILS_JSON: &str = include_str!("../data/horse_details.json");
const VACCINATIONS_DUE_JSON: &str = include_str!("../data/vaccinations_due.json");

/// Errors raised while loading the seed datasets.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// All collections the app works with, loaded and validated.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub horses: EntityStore<Horse>,
    pub health_records: EntityStore<HealthRecord>,
    pub feeding_schedule: EntityStore<FeedingEntry>,
    pub horse_details: EntityStore<HorseDetail>,
    pub vaccinations_due: Vec<VaccinationDue>,
}

/// Load and validate the embedded datasets.
///
/// Horse records must pass entity validation and every collection must have
/// unique ids. Denormalized horse-name references are only audited: a name
/// that matches no horse is accepted data looseness and logged at warn
/// level, never rejected.
pub fn load() -> Result<SeedData, SeedError> {
    let horses: Vec<Horse> = parse(HORSES_JSON, "horses.json")?;
    for horse in &horses {
        validate_horse(horse)?;
    }

    let health_records: Vec<HealthRecord> = parse(HEALTH_RECORDS_JSON, "health_records.json")?;
    let feeding_schedule: Vec<FeedingEntry> =
        parse(FEEDING_SCHEDULE_JSON, "feeding_schedule.json")?;
    let horse_details: Vec<HorseDetail> = parse(HORSE_DETAILS_JSON, "horse_details.json")?;
    let vaccinations_due: Vec<VaccinationDue> =
        parse(VACCINATIONS_DUE_JSON, "vaccinations_due.json")?;

    audit_name_references(&horses, &health_records, &feeding_schedule);

    let data = SeedData {
        horses: EntityStore::new(horses)?,
        health_records: EntityStore::new(health_records)?,
        feeding_schedule: EntityStore::new(feeding_schedule)?,
        horse_details: EntityStore::new(horse_details)?,
        vaccinations_due,
    };

    tracing::info!(
        horses = data.horses.len(),
        health_records = data.health_records.len(),
        feeding_entries = data.feeding_schedule.len(),
        "Seed data loaded"
    );

    Ok(data)
}

fn parse<T: serde::de::DeserializeOwned>(
    raw: &str,
    file: &'static str,
) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(raw).map_err(|source| SeedError::Parse { file, source })
}

/// Horse-name references that match no horse in the roster.
pub fn dangling_horse_names<'a>(
    horses: &[Horse],
    referenced: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let known: HashSet<&str> = horses.iter().map(|h| h.name.as_str()).collect();

    let mut dangling: Vec<String> = referenced
        .into_iter()
        .filter(|name| !known.contains(name))
        .map(str::to_owned)
        .collect();
    dangling.sort();
    dangling.dedup();
    dangling
}

fn audit_name_references(
    horses: &[Horse],
    health_records: &[HealthRecord],
    feeding_schedule: &[FeedingEntry],
) {
    let referenced = health_records
        .iter()
        .map(|r| r.horse_name.as_str())
        .chain(feeding_schedule.iter().map(|e| e.horse_name.as_str()));

    for name in dangling_horse_names(horses, referenced) {
        tracing::warn!(horse_name = %name, "Record references a horse not in the roster");
    }
}
