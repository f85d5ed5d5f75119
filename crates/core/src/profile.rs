//! Per-horse profile: detail records and the profile tab set.

use serde::{Deserialize, Serialize};

use crate::feeding::FeedingTime;
use crate::types::{CalendarDate, EntityId, Identified};

/// Tabs on the horse profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Medical,
    Feeding,
    Notes,
}

impl ProfileTab {
    /// All tabs, in display order.
    pub const ALL: [Self; 3] = [Self::Medical, Self::Feeding, Self::Notes];

    pub fn label(self) -> &'static str {
        match self {
            Self::Medical => "Medical History",
            Self::Feeding => "Feeding Schedule",
            Self::Notes => "Notes",
        }
    }
}

/// Extended care profile for one horse, keyed by the same id as the roster
/// record. Looking up an unknown id yields `None`; "horse not found" is a
/// value, not a runtime error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorseDetail {
    pub id: EntityId,
    pub weight: String,
    pub height: String,
    pub microchip_id: String,
    pub temperament: String,
    pub special_needs: String,
    pub medical_history: Vec<MedicalEvent>,
    pub feeding_schedule: Vec<FeedingPlanItem>,
    pub notes: Vec<CareNote>,
}

impl Identified for HorseDetail {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One past medical event on the profile's medical-history tab. The event
/// type is display text from the data source, not the health-record enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalEvent {
    pub date: CalendarDate,
    #[serde(rename = "type")]
    pub event_type: String,
    pub description: String,
    pub vet: String,
}

/// One row of the horse's standing feeding plan (no completion state).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingPlanItem {
    pub time: FeedingTime,
    pub food: String,
    #[serde(with = "crate::feeding::supplements")]
    pub supplements: Option<String>,
}

/// A free-form staff note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareNote {
    pub date: CalendarDate,
    pub author: String,
    pub note: String,
}

/// Whole days elapsed since a horse arrived at the shelter.
///
/// Pure over its two dates; the caller supplies "today" so views and tests
/// control the clock.
pub fn days_since_arrival(arrival: CalendarDate, today: CalendarDate) -> i64 {
    (today - arrival).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_is_medical() {
        assert_eq!(ProfileTab::default(), ProfileTab::Medical);
    }

    #[test]
    fn days_since_arrival_counts_whole_days() {
        let arrival = CalendarDate::from_ymd_opt(2023, 3, 15).unwrap();
        let today = CalendarDate::from_ymd_opt(2023, 3, 20).unwrap();
        assert_eq!(days_since_arrival(arrival, today), 5);
    }

    #[test]
    fn arrival_today_is_zero_days() {
        let day = CalendarDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(days_since_arrival(day, day), 0);
    }

    #[test]
    fn detail_deserializes_from_upstream_shape() {
        let detail: HorseDetail = serde_json::from_str(
            r#"{
                "id": "1",
                "weight": "1,200 lbs",
                "height": "16 hands",
                "microchipId": "TC8472956",
                "temperament": "Calm and friendly",
                "specialNeeds": "None",
                "medicalHistory": [
                    {
                        "date": "2024-11-15",
                        "type": "Checkup",
                        "description": "Annual veterinary examination - all clear",
                        "vet": "Dr. Sarah Johnson"
                    }
                ],
                "feedingSchedule": [
                    { "time": "6:00 AM", "food": "Hay (5 lbs) + Grain (2 lbs)", "supplements": "Joint support" },
                    { "time": "12:00 PM", "food": "Hay (3 lbs)", "supplements": "None" }
                ],
                "notes": [
                    {
                        "date": "2024-11-28",
                        "author": "Jane Smith",
                        "note": "Responding well to new exercise routine"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(detail.microchip_id, "TC8472956");
        assert_eq!(detail.medical_history.len(), 1);
        assert_eq!(detail.feeding_schedule[0].time, FeedingTime::Morning);
        assert_eq!(detail.feeding_schedule[1].supplements, None);
        assert_eq!(detail.notes[0].author, "Jane Smith");
    }
}
