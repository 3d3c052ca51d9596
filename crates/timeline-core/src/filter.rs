//! The filter engine.
//!
//! A record passes when its year is at most `max_year`, it involves at
//! least one allowed actor, and its topic matches the requested topic (an
//! absent topic matches everything). Filtering never reorders, copies or
//! synthesises records.

use timeline_types::{EventRecord, FilterCriteria, FilterSummary};

/// Whether a single record satisfies every predicate of `criteria`.
pub fn matches(record: &EventRecord, criteria: &FilterCriteria) -> bool {
    record.year <= criteria.max_year
        && record.involves_any(&criteria.allowed_actors)
        && criteria.topic.is_none_or(|topic| record.topic == topic)
}

/// Return the records that satisfy `criteria`, in input order.
///
/// Accepts any iterator of record references, so the output of one call can
/// be fed straight back into another.
pub fn filter_events<'a, I>(events: I, criteria: &FilterCriteria) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    events
        .into_iter()
        .filter(|record| matches(record, criteria))
        .collect()
}

/// Statistics for the map panel.
pub const fn summarize(total: usize, shown: usize, criteria: &FilterCriteria) -> FilterSummary {
    FilterSummary {
        shown,
        total,
        max_year: criteria.max_year,
    }
}
