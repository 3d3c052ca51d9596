//! HTTP site for the Vietnam 1954–1964 timeline.
//!
//! This crate provides an Axum server that exposes:
//!
//! - **HTML pages** rendered from embedded `minijinja` templates: home,
//!   history (with the ask-AI form), the filtered event map, login and
//!   register placeholders, and the admin dashboard
//! - **JSON API** under `/api` for events, history content, map overlays,
//!   chat and health
//!
//! # Architecture
//!
//! All request handling reads from an immutable [`AppState`] shared via
//! `Arc`. The only suspension point is the chat call. Unmatched paths
//! render the not-found page with status 404.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod server;
pub mod state;
pub mod templates;

// Re-export primary types for convenience.
pub use error::SiteError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
