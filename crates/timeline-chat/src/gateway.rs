//! The single `ask` contract in front of both backends.

use timeline_types::ChatExchange;
use tracing::{debug, info, warn};

use crate::config::{BackendType, ChatConfig};
use crate::error::ChatError;
use crate::gemini::{GeminiBackend, compose_prompt};
use crate::offline::OfflineResponder;

/// The active chat backend.
///
/// Enum dispatch keeps `ask` an ordinary `async fn` without boxing.
pub enum ChatGateway {
    /// Gemini over HTTPS.
    Gemini(GeminiBackend),
    /// Local keyword rules.
    Offline(OfflineResponder),
}

impl ChatGateway {
    /// Answer `question`, optionally prefixed by `system_preamble`.
    ///
    /// # Errors
    ///
    /// - [`ChatError::EmptyQuestion`] if `question` is blank
    /// - [`ChatError::Configuration`] if the Gemini backend has no credential
    /// - [`ChatError::Gateway`] if the Gemini call fails
    pub async fn ask(
        &self,
        question: &str,
        system_preamble: Option<&str>,
    ) -> Result<String, ChatError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::EmptyQuestion);
        }

        debug!(backend = self.name(), chars = question.chars().count(), "asking");

        let result = match self {
            Self::Gemini(backend) => {
                backend
                    .ask(&compose_prompt(question, system_preamble))
                    .await
            }
            Self::Offline(responder) => Ok(responder.answer(question).to_owned()),
        };

        if let Err(e) = &result {
            warn!(backend = self.name(), error = %e, "chat request failed");
        }
        result
    }

    /// Like [`ChatGateway::ask`], but returns the full exchange.
    ///
    /// # Errors
    ///
    /// Same as [`ChatGateway::ask`].
    pub async fn exchange(
        &self,
        question: &str,
        system_preamble: Option<&str>,
    ) -> Result<ChatExchange, ChatError> {
        let answer = self.ask(question, system_preamble).await?;
        Ok(ChatExchange {
            question: question.trim().to_owned(),
            system_preamble: system_preamble.map(ToOwned::to_owned),
            answer,
        })
    }

    /// Human-readable name for logging and health checks.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gemini(_) => "gemini",
            Self::Offline(_) => "offline",
        }
    }
}

/// Build the gateway selected by `config.backend`.
pub fn create_gateway(config: &ChatConfig) -> ChatGateway {
    let gateway = match config.backend {
        BackendType::Gemini => {
            if !config.has_credential() {
                warn!("no Gemini credential configured; chat requests will fail");
            }
            ChatGateway::Gemini(GeminiBackend::new(config))
        }
        BackendType::Offline => ChatGateway::Offline(OfflineResponder::new()),
    };
    info!(backend = gateway.name(), model = %config.model, "chat gateway ready");
    gateway
}
