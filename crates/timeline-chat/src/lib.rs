//! Chat gateway for the timeline site.
//!
//! A question goes in, an answer string comes out. Two backends sit behind
//! [`ChatGateway`]:
//!
//! - [`gemini`] -- one POST to the Gemini `generateContent` API
//! - [`offline`] -- a local keyword rule table, no network
//!
//! The active backend and its settings come from [`ChatConfig`], built once
//! at startup. The API key is read from the environment only.

pub mod config;
pub mod error;
pub mod gateway;
pub mod gemini;
pub mod offline;

pub use config::{BACKEND_ENV_VAR, BackendType, CREDENTIAL_ENV_VAR, ChatConfig};
pub use error::ChatError;
pub use gateway::{ChatGateway, create_gateway};
pub use gemini::{GENERIC_GATEWAY_ERROR, MISSING_CREDENTIAL, NO_RESPONSE_PLACEHOLDER};
pub use offline::{FALLBACK_ANSWER, OfflineResponder};
