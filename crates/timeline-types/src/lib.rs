//! Shared type definitions for the Vietnam 1954–1964 timeline site.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace. `ts-rs` writes `TypeScript` declarations of the JSON API
//! shapes to `bindings/` when the crate's tests run.
//!
//! # Modules
//!
//! - [`enums`] -- Actor tags, topics, importance and overlay kinds
//! - [`structs`] -- Event records, filter criteria, chat exchanges, overlays
//! - [`history`] -- Timeline, debate and conclusion content

pub mod enums;
pub mod history;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ActorTag, Importance, OverlayKind, ParseTagError, Topic};
pub use history::{
    ActorProfile, ConclusionPoint, DebatePoint, HistoryContent, SourceRef, TimelineEntry, YearSpan,
};
pub use structs::{
    ChatExchange, Coordinate, EventRecord, FilterCriteria, FilterSummary, MapOverlay, YEAR_MAX,
    YEAR_MIN,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::enums::ActorTag::export_all();
        let _ = crate::enums::Topic::export_all();
        let _ = crate::enums::Importance::export_all();
        let _ = crate::enums::OverlayKind::export_all();

        let _ = crate::structs::Coordinate::export_all();
        let _ = crate::structs::EventRecord::export_all();
        let _ = crate::structs::FilterCriteria::export_all();
        let _ = crate::structs::FilterSummary::export_all();
        let _ = crate::structs::ChatExchange::export_all();
        let _ = crate::structs::MapOverlay::export_all();

        let _ = crate::history::HistoryContent::export_all();
    }
}
