//! Error types for the `timeline-core` crate.

/// Errors raised while assembling the event catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two records share the same id.
    #[error("duplicate event id: {0}")]
    DuplicateId(String),

    /// A record lists no actor tags.
    #[error("event {0} has no actor tags")]
    NoActors(String),

    /// A record lists the same actor tag more than once.
    #[error("event {id} lists actor {actor} more than once")]
    DuplicateActor {
        /// The offending record.
        id: String,
        /// The repeated tag.
        actor: timeline_types::ActorTag,
    },
}

/// Errors raised while turning a query string into filter criteria.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The `topic` parameter is neither `all` nor a known topic.
    #[error("invalid topic: {0}")]
    InvalidTopic(String),
}
