//! Strict decoding of the structured model outputs.
//!
//! Decode failures keep the raw text so it can be surfaced for diagnosis.

use serde::Deserialize;

use super::PipelineError;
use crate::models::TranslatedWord;

#[derive(Deserialize)]
struct WordsPayload {
    words: Vec<String>,
}

#[derive(Deserialize)]
struct TranslatedPayload {
    translated_words: Vec<TranslatedWord>,
}

/// Decode `{"words": ["...", ...]}`, preserving array order.
pub fn decode_words(raw: &str) -> Result<Vec<String>, PipelineError> {
    let payload: WordsPayload =
        serde_json::from_str(raw).map_err(|e| PipelineError::Decode {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;
    Ok(payload.words)
}

/// Decode `{"translated_words": [{"vi": "...", "en": "..."}, ...]}`.
pub fn decode_translations(raw: &str) -> Result<Vec<TranslatedWord>, PipelineError> {
    let payload: TranslatedPayload =
        serde_json::from_str(raw).map_err(|e| PipelineError::Decode {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;
    Ok(payload.translated_words)
}
