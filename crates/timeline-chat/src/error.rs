//! Error types for the chat gateway.
//!
//! Every failure is surfaced to the visitor as an inline message; none is
//! fatal to the rest of the site.

/// Errors that can occur while answering a question.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The gateway is not usable as configured (e.g. missing credential).
    /// Raised before any network activity.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The upstream service was unreachable or reported a failure.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// The question was blank.
    #[error("question is empty")]
    EmptyQuestion,
}

impl ChatError {
    /// The message shown to the visitor, without the variant prefix.
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration(msg) | Self::Gateway(msg) => msg.clone(),
            Self::EmptyQuestion => String::from("Vui lòng nhập câu hỏi."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_strips_prefix() {
        let err = ChatError::Gateway(String::from("quota exceeded"));
        assert_eq!(err.to_string(), "gateway error: quota exceeded");
        assert_eq!(err.user_message(), "quota exceeded");
    }
}
