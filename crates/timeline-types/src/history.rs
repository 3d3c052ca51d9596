//! Content types for the history page: timeline entries, actor profiles,
//! the debate section, the conclusion and reference sources.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The year or year range a timeline entry covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum YearSpan {
    /// A single year.
    Single {
        /// The year.
        year: i32,
    },
    /// An inclusive range of years.
    Range {
        /// First year.
        start: i32,
        /// Last year.
        end: i32,
    },
}

impl YearSpan {
    /// First year of the span.
    pub const fn start(self) -> i32 {
        match self {
            Self::Single { year } => year,
            Self::Range { start, .. } => start,
        }
    }

    /// Last year of the span.
    pub const fn end(self) -> i32 {
        match self {
            Self::Single { year } => year,
            Self::Range { end, .. } => end,
        }
    }
}

impl fmt::Display for YearSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single { year } => write!(f, "{year}"),
            Self::Range { start, end } => write!(f, "{start}–{end}"),
        }
    }
}

/// One milestone on the history timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TimelineEntry {
    /// Anchor slug for the entry.
    pub id: String,
    /// Period covered.
    pub span: YearSpan,
    /// Heading.
    pub title: String,
    /// One-line description shown collapsed.
    pub description: String,
    /// Bullet points shown when expanded.
    pub details: Vec<String>,
}

/// A thematic card in the "actors" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActorProfile {
    /// Slug.
    pub id: String,
    /// Card title.
    pub name: String,
    /// Subtitle.
    pub role: String,
    /// Paragraph.
    pub summary: String,
    /// Short bullet highlights.
    pub highlights: Vec<String>,
}

/// One argument in the "civil war or resistance war" debate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DebatePoint {
    /// Argument heading.
    pub title: String,
    /// Supporting bullet points.
    pub points: Vec<String>,
}

/// One paragraph of the conclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConclusionPoint {
    /// Heading.
    pub title: String,
    /// Paragraph body.
    pub body: String,
}

/// An external reference link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SourceRef {
    /// Link text.
    pub label: String,
    /// Target URL.
    pub url: String,
}

/// Everything the history page renders, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HistoryContent {
    /// Chronological milestones.
    pub timeline: Vec<TimelineEntry>,
    /// Thematic actor cards.
    pub actors: Vec<ActorProfile>,
    /// Debate arguments.
    pub debate: Vec<DebatePoint>,
    /// Lead paragraph of the conclusion.
    pub conclusion_summary: String,
    /// Conclusion paragraphs.
    pub conclusion: Vec<ConclusionPoint>,
    /// Closing "in short" paragraph.
    pub conclusion_takeaway: String,
    /// Reference links.
    pub sources: Vec<SourceRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_span_display() {
        assert_eq!(YearSpan::Single { year: 1963 }.to_string(), "1963");
        assert_eq!(
            YearSpan::Range {
                start: 1954,
                end: 1958
            }
            .to_string(),
            "1954–1958"
        );
    }

    #[test]
    fn year_span_is_internally_tagged() {
        let json = serde_json::to_value(YearSpan::Range {
            start: 1959,
            end: 1960,
        })
        .unwrap_or_default();
        assert_eq!(json["kind"], "range");
        assert_eq!(json["start"], 1959);
    }
}
