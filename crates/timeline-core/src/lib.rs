//! Event catalog, history content and filter engine for the timeline site.
//!
//! Everything here is pure data or pure functions over it:
//!
//! - [`catalog`] -- the validated map event catalog and static overlays
//! - [`content`] -- timeline, debate and conclusion text for the history page
//! - [`filter`] -- year / actor / topic filtering
//! - [`query`] -- map query string parsing into [`FilterCriteria`]
//!
//! [`FilterCriteria`]: timeline_types::FilterCriteria

pub mod catalog;
pub mod content;
pub mod error;
pub mod filter;
pub mod query;

pub use catalog::{Catalog, map_overlays};
pub use content::history_content;
pub use error::{CatalogError, QueryError};
pub use filter::{filter_events, matches, summarize};
pub use query::MapQuery;
