use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::{ApiContext, ApiError};
use crate::db;
use crate::models::NewDialog;
use crate::pipeline::{self, orchestrator::DIALOG_LANG};

#[derive(Serialize)]
pub struct DialogResponse {
    pub dialog_id: i64,
    pub dialog: String,
}

/// `GET /dialog` — generate a dialog and persist it.
pub async fn generate(State(ctx): State<ApiContext>) -> Result<Json<DialogResponse>, ApiError> {
    let dialog = pipeline::generate_dialog(ctx.llm.as_ref()).await?;

    let dialog_id = {
        let conn = ctx.db()?;
        db::insert_dialog(
            &conn,
            &NewDialog {
                lang: DIALOG_LANG.into(),
                content: dialog.clone(),
            },
        )?
    };

    tracing::info!(dialog_id, chars = dialog.len(), "dialog generated and saved");

    Ok(Json(DialogResponse { dialog_id, dialog }))
}
