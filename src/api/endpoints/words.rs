use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{ApiContext, ApiError};
use crate::pipeline;

#[derive(Deserialize)]
pub struct WordsParams {
    pub dialog: Option<String>,
}

#[derive(Serialize)]
pub struct WordsResponse {
    pub extracted_words: Vec<String>,
}

/// `GET /words?dialog=<text>` — extract vocabulary from a dialog.
pub async fn extract(
    State(ctx): State<ApiContext>,
    Query(params): Query<WordsParams>,
) -> Result<Json<WordsResponse>, ApiError> {
    let dialog = params
        .dialog
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing 'dialog' parameter".into()))?;

    let extracted_words = pipeline::extract_words(ctx.llm.as_ref(), dialog).await?;

    Ok(Json(WordsResponse { extracted_words }))
}
