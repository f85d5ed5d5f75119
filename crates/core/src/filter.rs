//! Filter predicate engine shared by the roster, health, and feeding screens.
//!
//! Combines a case-insensitive text query over an entity's designated fields
//! with a single-choice category filter carrying an "all" sentinel. All
//! predicates are pure; filtering preserves input order and is idempotent.

/// Entities searchable by free-text query.
pub trait TextSearchable {
    /// The fields examined by the text query.
    fn search_text(&self) -> Vec<&str>;
}

/// Entities carrying one categorical value used by single-choice filters.
pub trait Categorized {
    type Category: Copy + PartialEq;

    fn category(&self) -> Self::Category;
}

/// Single-choice category filter with an explicit "show everything" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Copy + PartialEq> CategoryFilter<C> {
    /// True when the filter admits the given category value.
    pub fn matches(self, value: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

/// Case-insensitive substring match over the entity's designated text fields.
///
/// The empty query matches every entity — the empty string is a substring of
/// anything — so an untouched search box never hides records.
pub fn matches_query<E: TextSearchable>(entity: &E, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    entity
        .search_text()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Combined predicate: the logical AND of the text and category tests.
pub fn matches<E>(entity: &E, query: &str, filter: CategoryFilter<E::Category>) -> bool
where
    E: TextSearchable + Categorized,
{
    matches_query(entity, query) && filter.matches(entity.category())
}

/// Filter a sequence by text query and category, preserving input order.
pub fn apply<'a, E>(
    entities: &'a [E],
    query: &str,
    filter: CategoryFilter<E::Category>,
) -> Vec<&'a E>
where
    E: TextSearchable + Categorized,
{
    entities
        .iter()
        .filter(|&entity| matches(entity, query, filter))
        .collect()
}

/// Filter a sequence by category alone (screens without a search box).
pub fn apply_category<'a, E: Categorized>(
    entities: &'a [E],
    filter: CategoryFilter<E::Category>,
) -> Vec<&'a E> {
    entities
        .iter()
        .filter(|entity| filter.matches(entity.category()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::horse::{Gender, Horse, HorseStatus};
    use crate::types::CalendarDate;

    fn horse(id: &str, name: &str, breed: &str, status: HorseStatus) -> Horse {
        Horse {
            id: id.to_string(),
            name: name.to_string(),
            breed: breed.to_string(),
            age: 8,
            gender: Gender::Gelding,
            status,
            location: "Barn A - Stall 3".to_string(),
            arrival_date: CalendarDate::from_ymd_opt(2023, 3, 15).unwrap(),
            image_url: None,
            color: "Bay".to_string(),
        }
    }

    fn roster() -> Vec<Horse> {
        vec![
            horse("1", "Thunder", "Thoroughbred", HorseStatus::Healthy),
            horse("5", "Max", "Morgan", HorseStatus::Treatment),
        ]
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let horses = roster();
        let found = apply(&horses, "thu", CategoryFilter::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Thunder");
    }

    #[test]
    fn query_matches_breed_too() {
        let horses = roster();
        let found = apply(&horses, "morg", CategoryFilter::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Max");
    }

    #[test]
    fn empty_query_depends_only_on_category() {
        let horses = roster();

        assert_eq!(apply(&horses, "", CategoryFilter::All).len(), 2);

        let treated = apply(&horses, "", CategoryFilter::Only(HorseStatus::Treatment));
        assert_eq!(treated.len(), 1);
        assert_eq!(treated[0].name, "Max");
    }

    #[test]
    fn combined_predicate_is_an_and() {
        let horses = roster();
        // "thu" matches Thunder, but Thunder is not in treatment.
        let found = apply(&horses, "thu", CategoryFilter::Only(HorseStatus::Treatment));
        assert!(found.is_empty());
    }

    #[test]
    fn category_filter_is_idempotent() {
        let horses = roster();
        let filter = CategoryFilter::Only(HorseStatus::Healthy);

        let once = apply_category(&horses, filter);
        let twice: Vec<&Horse> = once
            .iter()
            .filter(|h| filter.matches(h.status))
            .copied()
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn blank_fields_do_not_hide_entities_from_empty_query() {
        let unnamed = horse("9", "", "", HorseStatus::Healthy);
        assert!(matches_query(&unnamed, ""));
        assert!(!matches_query(&unnamed, "thu"));
    }

    #[test]
    fn default_filter_is_all() {
        let filter: CategoryFilter<HorseStatus> = CategoryFilter::default();
        assert!(filter.matches(HorseStatus::Observation));
    }
}
