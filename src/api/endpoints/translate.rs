use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{ApiContext, ApiError};
use crate::models::TranslatedWord;
use crate::pipeline;

#[derive(Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translated_words: Vec<TranslatedWord>,
}

/// `POST /translate` — translate a word list.
pub async fn translate(
    State(ctx): State<ApiContext>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    if req.words.is_empty() {
        return Err(ApiError::BadRequest("No words provided for translation".into()));
    }

    let translated_words = pipeline::translate_words(ctx.llm.as_ref(), &req.words).await?;

    Ok(Json(TranslateResponse { translated_words }))
}
