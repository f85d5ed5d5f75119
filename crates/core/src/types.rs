//! Shared type vocabulary.

/// All entity identifiers are opaque strings assigned by the data source.
pub type EntityId = String;

/// All calendar dates are date-only values (no time component, no zone).
pub type CalendarDate = chrono::NaiveDate;

/// Entities addressable by a unique identifier within their collection.
pub trait Identified {
    fn id(&self) -> &str;
}
