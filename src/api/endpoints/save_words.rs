use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{ApiContext, ApiError};
use crate::db;
use crate::models::TranslatedWord;
use crate::pipeline::{self, SavedWord};

#[derive(Deserialize)]
pub struct SaveWordsRequest {
    pub dialog_id: i64,
    #[serde(default)]
    pub translated_words: Vec<TranslatedWord>,
}

/// Partial success is still a success: words that failed to save appear
/// in `failed` and everything else in `saved_words`.
#[derive(Serialize)]
pub struct SaveWordsResponse {
    pub dialog_id: i64,
    pub saved_words: Vec<SavedWord>,
    pub failed: Vec<String>,
}

/// `POST /save-words` — persist translated pairs and link them to a dialog.
pub async fn save(
    State(ctx): State<ApiContext>,
    Json(req): Json<SaveWordsRequest>,
) -> Result<Json<SaveWordsResponse>, ApiError> {
    if req.translated_words.is_empty() {
        return Err(ApiError::BadRequest("No translated words provided".into()));
    }

    let conn = ctx.db()?;
    if db::get_dialog(&conn, req.dialog_id)?.is_none() {
        return Err(ApiError::NotFound(format!(
            "Dialog {} does not exist",
            req.dialog_id
        )));
    }

    let outcomes = pipeline::save_words(&conn, req.dialog_id, &req.translated_words);

    let mut saved_words = Vec::new();
    let mut failed = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(word_id) => saved_words.push(SavedWord {
                vi: outcome.word.vi,
                en: outcome.word.en,
                word_id,
            }),
            Err(_) => failed.push(outcome.word.vi),
        }
    }

    Ok(Json(SaveWordsResponse {
        dialog_id: req.dialog_id,
        saved_words,
        failed,
    }))
}
