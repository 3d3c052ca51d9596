//! Configuration for the chat gateway.
//!
//! Non-secret settings come from the `chat` section of the site YAML file.
//! The credential is only ever read from the environment
//! ([`CREDENTIAL_ENV_VAR`]) and is never logged.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ChatError;

/// Environment variable holding the generative-language API key.
pub const CREDENTIAL_ENV_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding [`ChatConfig::backend`].
pub const BACKEND_ENV_VAR: &str = "TIMELINE_CHAT_BACKEND";

/// Which implementation answers questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    /// Google Gemini `generateContent` over HTTPS.
    #[default]
    Gemini,
    /// Local keyword rules; no network access.
    Offline,
}

impl FromStr for BackendType {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "offline" | "rules" => Ok(Self::Offline),
            other => Err(ChatError::Configuration(format!(
                "unknown chat backend: {other}"
            ))),
        }
    }
}

/// Chat gateway settings, built once at startup and injected.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ChatConfig {
    /// Active backend.
    #[serde(default)]
    pub backend: BackendType,

    /// Base API URL, without the `/models/...` suffix.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Instruction text prepended to every question from the history page.
    #[serde(default = "default_system_preamble")]
    pub system_preamble: Option<String>,

    /// API key. Only populated from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl ChatConfig {
    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// - [`CREDENTIAL_ENV_VAR`] sets the API key (blank values are ignored)
    /// - [`BACKEND_ENV_VAR`] overrides the backend
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Configuration`] if the backend override names an
    /// unknown backend.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ChatError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(CREDENTIAL_ENV_VAR).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key.trim().to_owned());
        }
        if let Some(backend) = lookup(BACKEND_ENV_VAR) {
            self.backend = backend.parse()?;
        }
        Ok(())
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Whether a credential is present.
    pub const fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            backend: BackendType::default(),
            api_url: default_api_url(),
            model: default_model(),
            system_preamble: default_system_preamble(),
            api_key: None,
        }
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("backend", &self.backend)
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("system_preamble", &self.system_preamble)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn default_api_url() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

fn default_model() -> String {
    String::from("gemini-2.0-flash")
}

#[allow(clippy::unnecessary_wraps)]
fn default_system_preamble() -> Option<String> {
    Some(String::from(
        "Bạn là trợ lý AI lịch sử Việt Nam giai đoạn 1954–1964. Chỉ trả lời dựa trên kiến thức lịch sử, không bịa đặt. Nếu không đủ dữ kiện, hãy trả lời \"Tôi chưa có thông tin về vấn đề này.\"",
    ))
}
