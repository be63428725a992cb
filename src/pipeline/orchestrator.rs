//! Drives the four-stage workflow: dialog generation, word extraction,
//! translation, persistence. Stages run strictly sequentially; stage 1–3
//! errors abort, stage 4 failures are isolated per word.

use rusqlite::Connection;
use serde::Serialize;

use super::{decode, prompt, PipelineError};
use crate::db::{self, DatabaseError};
use crate::llm::{extract_payload, GenerationError, LlmClient};
use crate::models::{NewDialog, NewWord, TranslatedWord};

/// Language of generated dialogs and extracted words.
pub const DIALOG_LANG: &str = "vi";

/// Stage 1: generate a dialog and strip any reasoning trace.
///
/// An empty post-extraction result is an error, never a silently empty dialog.
pub async fn generate_dialog(llm: &dyn LlmClient) -> Result<String, PipelineError> {
    let raw = llm.generate(prompt::DIALOG_PROMPT, false).await?;
    let dialog = extract_payload(&raw);
    if dialog.is_empty() {
        tracing::warn!(raw_len = raw.len(), "dialog generation produced no usable text");
        return Err(GenerationError::EmptyCompletion.into());
    }
    Ok(dialog.to_string())
}

/// Stage 2: extract the important words of a dialog.
pub async fn extract_words(
    llm: &dyn LlmClient,
    dialog: &str,
) -> Result<Vec<String>, PipelineError> {
    if dialog.trim().is_empty() {
        return Err(PipelineError::Validation("dialog text is empty".into()));
    }
    let raw = llm.generate(&prompt::build_words_prompt(dialog), true).await?;
    decode::decode_words(&raw)
}

/// Stage 3: translate a word list.
pub async fn translate_words(
    llm: &dyn LlmClient,
    words: &[String],
) -> Result<Vec<TranslatedWord>, PipelineError> {
    if words.is_empty() {
        return Err(PipelineError::Validation(
            "no words provided for translation".into(),
        ));
    }
    let raw = llm
        .generate(&prompt::build_translate_prompt(words), true)
        .await?;
    decode::decode_translations(&raw)
}

/// Result of saving one translated pair during stage 4.
#[derive(Debug)]
pub struct SaveOutcome {
    pub word: TranslatedWord,
    pub result: Result<i64, DatabaseError>,
}

/// A saved pair with its store-assigned word id.
#[derive(Debug, Clone, Serialize)]
pub struct SavedWord {
    pub vi: String,
    pub en: String,
    pub word_id: i64,
}

/// Stage 4: save each translated pair and link it to the dialog.
///
/// A failing word is logged and recorded in its outcome; the batch always
/// runs to completion. One outcome per input pair, in input order.
pub fn save_words(
    conn: &Connection,
    dialog_id: i64,
    pairs: &[TranslatedWord],
) -> Vec<SaveOutcome> {
    pairs
        .iter()
        .map(|pair| {
            let result = save_one(conn, dialog_id, pair);
            if let Err(e) = &result {
                tracing::warn!(word = %pair.vi, error = %e, "skipping word that failed to save");
            }
            SaveOutcome {
                word: pair.clone(),
                result,
            }
        })
        .collect()
}

fn save_one(
    conn: &Connection,
    dialog_id: i64,
    pair: &TranslatedWord,
) -> Result<i64, DatabaseError> {
    let word_id = db::save_word(
        conn,
        &NewWord {
            lang: DIALOG_LANG.into(),
            content: pair.vi.clone(),
            translation: pair.en.clone(),
        },
    )?;
    db::link_dialog_word(conn, dialog_id, word_id)?;
    Ok(word_id)
}

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct PipelineRun {
    pub dialog_id: i64,
    pub dialog: String,
    pub words: Vec<String>,
    pub outcomes: Vec<SaveOutcome>,
}

/// Run all four stages for one request.
///
/// Any stage 1–3 failure (or the dialog insert failing) aborts with that
/// stage's error; per-word save failures are partial and reported in the
/// outcomes.
pub async fn run_pipeline(
    llm: &dyn LlmClient,
    conn: &Connection,
) -> Result<PipelineRun, PipelineError> {
    let dialog = generate_dialog(llm).await?;
    let words = extract_words(llm, &dialog).await?;
    let translations = translate_words(llm, &words).await?;

    let dialog_id = db::insert_dialog(
        conn,
        &NewDialog {
            lang: DIALOG_LANG.into(),
            content: dialog.clone(),
        },
    )?;
    let outcomes = save_words(conn, dialog_id, &translations);

    Ok(PipelineRun {
        dialog_id,
        dialog,
        words,
        outcomes,
    })
}
