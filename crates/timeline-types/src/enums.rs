//! Enumeration types for the timeline site.
//!
//! Actor tags, topics, event importance, and map overlay kinds. Actor tags
//! and topics carry their display label and colour so every page renders
//! them consistently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A tag string that does not name any known actor or topic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTagError {
    /// The value is not one of `North`, `South`, `NLF`, `US`.
    #[error("unknown actor tag: {0}")]
    UnknownActor(String),

    /// The value is not one of `politics`, `military`, `diplomacy`, `legal`.
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
}

// ---------------------------------------------------------------------------
// Actor tags
// ---------------------------------------------------------------------------

/// A historical party involved in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ActorTag {
    /// Democratic Republic of Vietnam.
    North,
    /// Republic of Vietnam.
    South,
    /// National Liberation Front of South Vietnam and its army.
    #[serde(rename = "NLF")]
    Nlf,
    /// United States.
    #[serde(rename = "US")]
    Us,
}

impl ActorTag {
    /// Every actor tag, in the order the map legend lists them.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::Nlf, Self::Us];

    /// Wire name used in query strings and JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::Nlf => "NLF",
            Self::Us => "US",
        }
    }

    /// Vietnamese display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "Miền Bắc (VNDCCH)",
            Self::South => "Miền Nam (VNCH)",
            Self::Nlf => "MTDTGP MN / QGP",
            Self::Us => "Hoa Kỳ",
        }
    }

    /// Marker colour as a CSS hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::North => "#ef4444",
            Self::South => "#3b82f6",
            Self::Nlf => "#10b981",
            Self::Us => "#8b5cf6",
        }
    }
}

impl fmt::Display for ActorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorTag {
    type Err = ParseTagError;

    /// Parse a wire name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseTagError::UnknownActor(trimmed.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

/// Thematic classification of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Topic {
    /// Political movements, crises and organisations.
    Politics,
    /// Military operations and doctrine.
    Military,
    /// Treaties, conferences and international resolutions.
    Diplomacy,
    /// Legal status and electoral questions.
    Legal,
}

impl Topic {
    /// Every topic, in the order the topic selector lists them.
    pub const ALL: [Self; 4] = [Self::Politics, Self::Military, Self::Diplomacy, Self::Legal];

    /// Wire name used in query strings and JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Politics => "politics",
            Self::Military => "military",
            Self::Diplomacy => "diplomacy",
            Self::Legal => "legal",
        }
    }

    /// Vietnamese display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Politics => "Chính trị",
            Self::Military => "Quân sự",
            Self::Diplomacy => "Ngoại giao",
            Self::Legal => "Pháp lý",
        }
    }

    /// Badge colour as a CSS hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Politics => "#f59e0b",
            Self::Military => "#dc2626",
            Self::Diplomacy => "#059669",
            Self::Legal => "#7c3aed",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|topic| topic.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseTagError::UnknownTopic(trimmed.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Importance and overlays
// ---------------------------------------------------------------------------

/// Editorial weight of an event on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Importance {
    /// A turning point of the period.
    High,
    /// A significant but secondary development.
    Medium,
    /// Background context.
    Low,
}

/// Geometry of a static map overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum OverlayKind {
    /// An open polyline.
    Line,
    /// A closed, filled polygon.
    Polygon,
}
