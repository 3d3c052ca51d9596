//! Core record types: map events, filter criteria, chat exchanges and
//! overlays.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{ActorTag, Importance, OverlayKind, Topic};

/// First year covered by the site.
pub const YEAR_MIN: i32 = 1954;

/// Last year covered by the site.
pub const YEAR_MAX: i32 = 1964;

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinate {
    /// Latitude, positive north.
    pub latitude: f64,
    /// Longitude, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate from a latitude/longitude pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// ---------------------------------------------------------------------------
// Event records
// ---------------------------------------------------------------------------

/// A single historical event shown on the map.
///
/// Records are built once when the catalog is assembled and never mutated.
/// `actor_tags` keeps declaration order: the first tag is the event's
/// primary actor and decides its marker colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventRecord {
    /// Stable slug, unique within the catalog.
    pub id: String,
    /// Headline shown on the marker popup.
    pub title: String,
    /// Year the event is anchored to.
    pub year: i32,
    /// One or two sentence summary.
    pub summary: String,
    /// Parties involved, primary actor first. Never empty.
    pub actor_tags: Vec<ActorTag>,
    /// Thematic classification.
    pub topic: Topic,
    /// Marker position.
    pub coordinate: Coordinate,
    /// Optional reference link.
    pub source_url: Option<String>,
    /// Editorial weight.
    pub importance: Importance,
}

impl EventRecord {
    /// The first listed actor, if any.
    pub fn primary_actor(&self) -> Option<ActorTag> {
        self.actor_tags.first().copied()
    }

    /// Whether the event's actor tags intersect `actors`.
    pub fn involves_any(&self, actors: &BTreeSet<ActorTag>) -> bool {
        self.actor_tags.iter().any(|tag| actors.contains(tag))
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Parameters for narrowing the event catalog.
///
/// Built fresh from each request's query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FilterCriteria {
    /// Inclusive upper bound on `EventRecord::year`.
    pub max_year: i32,
    /// Events must involve at least one of these actors.
    pub allowed_actors: BTreeSet<ActorTag>,
    /// When set, events must carry exactly this topic.
    pub topic: Option<Topic>,
}

impl FilterCriteria {
    /// Criteria with the given year bound, every actor, and no topic.
    pub fn up_to(max_year: i32) -> Self {
        Self {
            max_year,
            allowed_actors: ActorTag::ALL.into_iter().collect(),
            topic: None,
        }
    }

    /// Replace the allowed actor set.
    #[must_use]
    pub fn with_actors<I>(mut self, actors: I) -> Self
    where
        I: IntoIterator<Item = ActorTag>,
    {
        self.allowed_actors = actors.into_iter().collect();
        self
    }

    /// Restrict to a single topic.
    #[must_use]
    pub const fn with_topic(mut self, topic: Option<Topic>) -> Self {
        self.topic = topic;
        self
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::up_to(YEAR_MAX)
    }
}

/// Counts shown in the map statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FilterSummary {
    /// Number of events that passed the filter.
    pub shown: usize,
    /// Number of events in the catalog.
    pub total: usize,
    /// The year bound that was applied.
    pub max_year: i32,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// One question and its answer. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ChatExchange {
    /// The visitor's question, trimmed of surrounding whitespace.
    pub question: String,
    /// Instruction text prepended to the prompt, if any.
    pub system_preamble: Option<String>,
    /// The answer text returned by the active responder.
    pub answer: String,
}

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

/// A static line or polygon drawn over the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MapOverlay {
    /// Stable slug.
    pub id: String,
    /// Layer toggle label.
    pub label: String,
    /// Geometry kind.
    pub kind: OverlayKind,
    /// Vertices in drawing order.
    pub points: Vec<Coordinate>,
    /// Stroke colour as a CSS hex string.
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EventRecord {
        EventRecord {
            id: String::from("special-war-1961"),
            title: String::from("Chiến tranh đặc biệt"),
            year: 1962,
            summary: String::from("Cố vấn Mỹ và quân VNCH."),
            actor_tags: vec![ActorTag::Us, ActorTag::South],
            topic: Topic::Military,
            coordinate: Coordinate::new(12.5, 107.5),
            source_url: None,
            importance: Importance::Medium,
        }
    }

    #[test]
    fn primary_actor_is_first_tag() {
        assert_eq!(sample().primary_actor(), Some(ActorTag::Us));
    }

    #[test]
    fn involves_any_checks_intersection() {
        let record = sample();
        let north_only: BTreeSet<ActorTag> = [ActorTag::North].into_iter().collect();
        let south_only: BTreeSet<ActorTag> = [ActorTag::South].into_iter().collect();
        assert!(!record.involves_any(&north_only));
        assert!(record.involves_any(&south_only));
        assert!(!record.involves_any(&BTreeSet::new()));
    }

    #[test]
    fn default_criteria_cover_everything() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.max_year, YEAR_MAX);
        assert_eq!(criteria.allowed_actors.len(), 4);
        assert!(criteria.topic.is_none());
    }

    #[test]
    fn event_record_json_uses_wire_names() {
        let json = serde_json::to_value(sample()).unwrap_or_default();
        assert_eq!(json["actor_tags"][0], "US");
        assert_eq!(json["topic"], "military");
        assert_eq!(json["importance"], "medium");
    }
}
