//! Aggregate calculators: counts, percentages, completion summaries.

use crate::filter::Categorized;

/// Rounded integer percentage of `part` out of `total`.
///
/// A zero `total` yields `0` rather than propagating a division by zero:
/// an empty checklist reads as "0% complete". The function is total and
/// never produces a non-numeric value.
///
/// # Examples
///
/// ```
/// use haven_core::aggregate::percentage;
/// assert_eq!(percentage(5, 18), 28);
/// assert_eq!(percentage(18, 18), 100);
/// assert_eq!(percentage(0, 0), 0);
/// ```
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }

    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// Count entities per category over a caller-supplied enumeration.
///
/// When `categories` fully covers the values present in the collection,
/// the counts sum to the collection length.
pub fn count_by_category<E: Categorized>(
    entities: &[E],
    categories: &[E::Category],
) -> Vec<(E::Category, usize)> {
    categories
        .iter()
        .map(|&category| {
            let count = entities
                .iter()
                .filter(|e| e.category() == category)
                .count();
            (category, count)
        })
        .collect()
}

/// Completion summary for a checklist-style collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub percentage: u32,
}

impl CompletionStats {
    /// Measure a collection against a completion predicate.
    pub fn measure<E>(entities: &[E], completed: impl Fn(&E) -> bool) -> Self {
        let total = entities.len();
        let done = entities.iter().filter(|e| completed(e)).count();

        Self {
            total,
            completed: done,
            pending: total - done,
            percentage: percentage(done, total),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
