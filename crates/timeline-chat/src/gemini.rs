//! Google Gemini `generateContent` backend.
//!
//! One POST per question with fixed generation parameters and safety
//! thresholds. No retries, caching or streaming. The credential travels as
//! the `key` query parameter and is stripped from transport errors before
//! they are surfaced.

use crate::config::ChatConfig;
use crate::error::ChatError;

/// Sampling temperature.
const TEMPERATURE: f64 = 0.4;

/// Top-k sampling cutoff.
const TOP_K: u32 = 40;

/// Nucleus sampling cutoff.
const TOP_P: f64 = 0.95;

/// Maximum tokens in the generated answer.
const MAX_OUTPUT_TOKENS: u32 = 800;

/// Generation stops before the model starts inventing a follow-up question.
const STOP_SEQUENCE: &str = "Câu hỏi:";

/// Content-safety categories, all blocked at [`SAFETY_THRESHOLD`].
const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Threshold applied to every safety category.
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

/// Returned when the service answers with no candidates.
pub const NO_RESPONSE_PLACEHOLDER: &str = "Không có phản hồi từ AI.";

/// Used when a failed response carries no `error.message`.
pub const GENERIC_GATEWAY_ERROR: &str = "Gemini API error";

/// Reported when no credential is configured.
pub const MISSING_CREDENTIAL: &str = "Missing Gemini API key";

/// Backend for the Gemini `generateContent` API.
pub struct GeminiBackend {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiBackend {
    /// Create a backend from configuration. A missing credential is not an
    /// error here; it is reported by each call to [`GeminiBackend::ask`].
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        }
    }

    /// Send `prompt` and return the first candidate's text.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Configuration`] without touching the network if
    /// no credential is configured, or [`ChatError::Gateway`] if the request
    /// fails or the service answers with a non-success status.
    pub async fn ask(&self, prompt: &str) -> Result<String, ChatError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ChatError::Configuration(MISSING_CREDENTIAL.to_owned()));
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                ChatError::Gateway(format!("Gemini request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        let body = response.json::<serde_json::Value>().await;

        if !status.is_success() {
            let message = body
                .ok()
                .as_ref()
                .and_then(extract_error_message)
                .unwrap_or_else(|| GENERIC_GATEWAY_ERROR.to_owned());
            tracing::warn!(%status, error = %message, "Gemini returned an error status");
            return Err(ChatError::Gateway(message));
        }

        let json = body.map_err(|e| {
            ChatError::Gateway(format!("Gemini response parse failed: {}", e.without_url()))
        })?;

        Ok(extract_answer(&json))
    }
}

/// Join the optional preamble and the question into a single prompt.
pub fn compose_prompt(question: &str, system_preamble: Option<&str>) -> String {
    match system_preamble.filter(|p| !p.trim().is_empty()) {
        Some(preamble) => format!("{preamble}\n\n{question}"),
        None => question.to_owned(),
    }
}

/// Build the `generateContent` request body.
pub fn request_body(prompt: &str) -> serde_json::Value {
    let safety_settings: Vec<serde_json::Value> = SAFETY_CATEGORIES
        .iter()
        .map(|category| {
            serde_json::json!({
                "category": category,
                "threshold": SAFETY_THRESHOLD,
            })
        })
        .collect();

    serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "temperature": TEMPERATURE,
            "topK": TOP_K,
            "topP": TOP_P,
            "maxOutputTokens": MAX_OUTPUT_TOKENS,
            "stopSequences": [STOP_SEQUENCE],
        },
        "safetySettings": safety_settings,
    })
}

/// Extract `candidates[0].content.parts[0].text`, trimmed.
///
/// No candidates, or a first candidate without text, yields
/// [`NO_RESPONSE_PLACEHOLDER`].
pub fn extract_answer(json: &serde_json::Value) -> String {
    json.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map_or_else(|| NO_RESPONSE_PLACEHOLDER.to_owned(), ToOwned::to_owned)
}

/// Extract `error.message` from a failure body.
fn extract_error_message(json: &serde_json::Value) -> Option<String> {
    json.get("error")
        .and_then(|e| e.get("message"))
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_includes_preamble() {
        assert_eq!(
            compose_prompt("Genève là gì?", Some("Bạn là trợ lý.")),
            "Bạn là trợ lý.\n\nGenève là gì?"
        );
        assert_eq!(compose_prompt("Genève là gì?", None), "Genève là gì?");
        assert_eq!(compose_prompt("Genève là gì?", Some("  ")), "Genève là gì?");
    }

    #[test]
    fn request_body_carries_fixed_parameters() {
        let body = request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 800);
        assert_eq!(body["generationConfig"]["stopSequences"][0], "Câu hỏi:");
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap_or_default();
        assert!((temperature - 0.4).abs() < 1e-9);
        let settings = body["safetySettings"].as_array().map(Vec::len);
        assert_eq!(settings, Some(4));
        assert_eq!(body["safetySettings"][3]["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
    }

    #[test]
    fn extract_answer_valid() {
        let json = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  Hiệp định Genève ký năm 1954.\n" }] }
            }]
        });
        assert_eq!(extract_answer(&json), "Hiệp định Genève ký năm 1954.");
    }

    #[test]
    fn extract_answer_without_candidates() {
        assert_eq!(
            extract_answer(&serde_json::json!({ "candidates": [] })),
            NO_RESPONSE_PLACEHOLDER
        );
        assert_eq!(extract_answer(&serde_json::json!({})), NO_RESPONSE_PLACEHOLDER);
    }

    #[test]
    fn extract_answer_candidate_without_text() {
        let json = serde_json::json!({ "candidates": [{ "finishReason": "SAFETY" }] });
        assert_eq!(extract_answer(&json), NO_RESPONSE_PLACEHOLDER);
    }

    #[test]
    fn extract_error_message_present_and_missing() {
        let json = serde_json::json!({ "error": { "code": 400, "message": "API key not valid." } });
        assert_eq!(extract_error_message(&json).as_deref(), Some("API key not valid."));
        assert!(extract_error_message(&serde_json::json!({ "error": {} })).is_none());
    }

    #[tokio::test]
    async fn missing_credential_fails_before_network() {
        let config = ChatConfig {
            api_url: String::from("http://192.0.2.1:9"),
            ..ChatConfig::default()
        };
        let backend = GeminiBackend::new(&config);
        let result = backend.ask("hello").await;
        assert!(matches!(result, Err(ChatError::Configuration(m)) if m == MISSING_CREDENTIAL));
    }
}
