pub mod extract;
pub mod groq;

pub use extract::extract_payload;
pub use groq::GroqClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Request to text-generation service failed: {0}")]
    Transport(String),

    #[error("Text-generation service returned error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Text-generation service reported: {0}")]
    Remote(String),

    #[error("Malformed text-generation response: {0}")]
    MalformedResponse(String),

    #[error("Text-generation response contained no content")]
    EmptyCompletion,
}

/// Text-generation client abstraction (allows mocking).
///
/// `json_mode` asks the remote service to constrain its output to a single
/// JSON object (`response_format: {type: "json_object"}` on the wire).
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str, json_mode: bool) -> Result<String, GenerationError>;
}

/// Mock client for testing — replays a scripted sequence of responses and
/// records the prompts it was given.
#[cfg(test)]
pub struct MockLlmClient {
    responses: std::sync::Mutex<std::collections::VecDeque<Result<String, GenerationError>>>,
    prompts: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: std::sync::Mutex::new(std::collections::VecDeque::new()),
            prompts: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(self, response: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(response.to_string()));
        self
    }

    pub fn with_error(self, error: GenerationError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Prompts seen so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, prompt: &str, _json_mode: bool) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyCompletion))
    }
}
