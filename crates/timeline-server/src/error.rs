//! Error types for the timeline server binary.
//!
//! [`AppError`] wraps every failure mode of startup and serving so that
//! `main` can propagate with `?`.

/// Top-level error for the timeline server binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// The built-in event catalog is inconsistent.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: timeline_core::CatalogError,
    },

    /// Site state could not be assembled.
    #[error("site error: {source}")]
    Site {
        /// The underlying site error.
        #[from]
        source: timeline_web::SiteError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: timeline_web::ServerError,
    },
}
