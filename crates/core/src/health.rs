//! Veterinary health-record entity, status tabs, and aggregates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::Categorized;
use crate::types::{CalendarDate, EntityId, Identified};

/// One veterinary record: a visit, treatment, or scheduled procedure.
///
/// `horse_name` is a denormalized reference, not a foreign key; duplicate
/// names are not disambiguated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: EntityId,
    pub horse_name: String,
    pub date: CalendarDate,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub description: String,
    pub veterinarian: String,
    pub status: RecordStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Identified for HealthRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The health screen's tabs partition records by status.
impl Categorized for HealthRecord {
    type Category = RecordStatus;

    fn category(&self) -> RecordStatus {
        self.status
    }
}

/// Kind of veterinary intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Checkup,
    Vaccination,
    Treatment,
    Dental,
    Emergency,
}

/// A record carries exactly one status at a time; it drives both the badge
/// color and which tab the record appears under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Completed,
    Scheduled,
    Urgent,
}

impl RecordStatus {
    /// All statuses, in tab order.
    pub const ALL: [Self; 3] = [Self::Completed, Self::Scheduled, Self::Urgent];

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Scheduled => "scheduled",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Headline counts for the health screen. `RecordStatus` is a fully-covering
/// enumeration, so the per-status counts always sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordStatusCounts {
    pub total: usize,
    pub completed: usize,
    pub scheduled: usize,
    pub urgent: usize,
}

pub fn count_by_status(records: &[HealthRecord]) -> RecordStatusCounts {
    let count = |status: RecordStatus| records.iter().filter(|r| r.status == status).count();

    RecordStatusCounts {
        total: records.len(),
        completed: count(RecordStatus::Completed),
        scheduled: count(RecordStatus::Scheduled),
        urgent: count(RecordStatus::Urgent),
    }
}

// ---------------------------------------------------------------------------
// Vaccination reminders
// ---------------------------------------------------------------------------

/// One row of the upcoming-vaccinations reminder list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationDue {
    pub horse: String,
    pub vaccine: String,
    pub due_date: CalendarDate,
    pub status: DueStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueStatus {
    DueSoon,
    Scheduled,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, status: RecordStatus) -> HealthRecord {
        HealthRecord {
            id: id.to_string(),
            horse_name: "Thunder".to_string(),
            date: CalendarDate::from_ymd_opt(2024, 11, 15).unwrap(),
            record_type: RecordType::Checkup,
            description: "Annual veterinary examination".to_string(),
            veterinarian: "Dr. Sarah Johnson".to_string(),
            status,
            notes: None,
        }
    }

    #[test]
    fn status_counts_sum_to_total() {
        let records = vec![
            record("1", RecordStatus::Completed),
            record("2", RecordStatus::Scheduled),
            record("3", RecordStatus::Urgent),
            record("4", RecordStatus::Completed),
        ];

        let counts = count_by_status(&records);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.completed, 2);
        assert_eq!(counts.scheduled, 1);
        assert_eq!(counts.urgent, 1);
        assert_eq!(
            counts.completed + counts.scheduled + counts.urgent,
            counts.total
        );
    }

    #[test]
    fn empty_collection_counts_are_zero() {
        let counts = count_by_status(&[]);
        assert_eq!(counts.total, 0);
        assert_eq!(counts.completed, 0);
    }

    #[test]
    fn record_type_uses_upstream_type_key() {
        let record: HealthRecord = serde_json::from_str(
            r#"{
                "id": "3",
                "horseName": "Max",
                "date": "2024-11-28",
                "type": "treatment",
                "description": "Monitoring weight loss - nutritional support",
                "veterinarian": "Dr. Sarah Johnson",
                "status": "urgent",
                "notes": "Weight down 50 lbs in 2 weeks."
            }"#,
        )
        .unwrap();

        assert_eq!(record.record_type, RecordType::Treatment);
        assert_eq!(record.status, RecordStatus::Urgent);
        assert!(record.notes.is_some());
    }

    #[test]
    fn due_status_uses_kebab_case() {
        let due: DueStatus = serde_json::from_str(r#""due-soon""#).unwrap();
        assert_eq!(due, DueStatus::DueSoon);
    }
}
