//! HTTP client for an OpenAI-compatible chat-completions endpoint
//! (Groq by default).

use serde::{Deserialize, Serialize};

use super::{GenerationError, LlmClient};

/// Client for a remote chat-completions service.
///
/// One outbound call per `generate` invocation; no caching, no retries.
/// Timeout policy is whatever the underlying reqwest client defaults to.
pub struct GroqClient {
    api_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(api_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// The model name sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Structured-output hint: asks the service to emit a single JSON object.
#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

impl ResponseFormat {
    fn json_object() -> Self {
        Self {
            format_type: "json_object",
        }
    }
}

/// Response envelope. A 2xx body may still carry an `error.message`.
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<RemoteError>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct RemoteError {
    message: String,
}

#[async_trait::async_trait]
impl LlmClient for GroqClient {
    async fn generate(&self, prompt: &str, json_mode: bool) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: json_mode.then(ResponseFormat::json_object),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the service's own error.message when the body parses.
            let message = serde_json::from_str::<ChatResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        if let Some(err) = parsed.error {
            return Err(GenerationError::Remote(err.message));
        }

        match parsed.choices.into_iter().next() {
            Some(choice) if !choice.message.content.is_empty() => Ok(choice.message.content),
            _ => Err(GenerationError::EmptyCompletion),
        }
    }
}
