//! Map query string handling.
//!
//! Turns the `year`, `actors` and `topic` parameters of the map page (and
//! the events API) into [`FilterCriteria`].

use std::collections::BTreeSet;

use serde::Deserialize;
use timeline_types::{ActorTag, FilterCriteria, Topic, YEAR_MAX, YEAR_MIN};
use tracing::debug;

use crate::error::QueryError;

/// Raw query parameters. Every field is kept as text so malformed values
/// fall back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapQuery {
    /// Upper year bound, clamped to 1954–1964.
    pub year: Option<String>,
    /// Comma-separated actor tags.
    pub actors: Option<String>,
    /// A topic name, or `all`.
    pub topic: Option<String>,
}

impl MapQuery {
    /// Build criteria, rejecting an unknown topic.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidTopic`] if `topic` is neither `all` nor a
    /// known topic.
    pub fn to_criteria(&self) -> Result<FilterCriteria, QueryError> {
        let topic = parse_topic(self.topic.as_deref())?;
        Ok(self.base_criteria().with_topic(topic))
    }

    /// Build criteria, treating an unknown topic as `all`.
    pub fn to_criteria_lenient(&self) -> FilterCriteria {
        let topic = parse_topic(self.topic.as_deref()).unwrap_or_default();
        self.base_criteria().with_topic(topic)
    }

    fn base_criteria(&self) -> FilterCriteria {
        FilterCriteria::up_to(parse_year(self.year.as_deref()))
            .with_actors(parse_actors(self.actors.as_deref()))
    }
}

/// Parse and clamp the `year` parameter. Missing, blank or non-numeric
/// values select [`YEAR_MAX`]. Integers of any magnitude are clamped, so a
/// negative number too long for `i64` still selects [`YEAR_MIN`].
pub fn parse_year(raw: Option<&str>) -> i32 {
    let Some(value) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return YEAR_MAX;
    };
    match value.parse::<i64>() {
        Ok(year) => {
            let clamped = year.clamp(i64::from(YEAR_MIN), i64::from(YEAR_MAX));
            i32::try_from(clamped).unwrap_or(YEAR_MAX)
        }
        Err(_) if is_negative_integer(value) => YEAR_MIN,
        Err(_) => YEAR_MAX,
    }
}

fn is_negative_integer(value: &str) -> bool {
    value
        .strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse the `actors` parameter.
///
/// A missing or blank list selects every actor. Unknown tags are skipped,
/// so a list made only of unknown tags selects no actor at all.
pub fn parse_actors(raw: Option<&str>) -> BTreeSet<ActorTag> {
    let segments: Vec<&str> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if segments.is_empty() {
        return ActorTag::ALL.into_iter().collect();
    }

    segments
        .into_iter()
        .filter_map(|s| match s.parse::<ActorTag>() {
            Ok(tag) => Some(tag),
            Err(e) => {
                debug!(error = %e, "skipping actor tag");
                None
            }
        })
        .collect()
}

/// Parse the `topic` parameter. `None`, blank and `all` mean no topic
/// restriction.
///
/// # Errors
///
/// Returns [`QueryError::InvalidTopic`] for any other unknown value.
pub fn parse_topic(raw: Option<&str>) -> Result<Option<Topic>, QueryError> {
    let Some(value) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    if value.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    match value.parse::<Topic>() {
        Ok(topic) => Ok(Some(topic)),
        Err(e) => {
            debug!(error = %e, "rejecting topic parameter");
            Err(QueryError::InvalidTopic(value.to_owned()))
        }
    }
}
