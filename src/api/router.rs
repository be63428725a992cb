//! Route table. Returns a composable `Router` that can be mounted on any
//! axum server.

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the application router.
pub fn app_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::index::welcome))
        .route("/health", get(endpoints::index::health))
        .route("/dialog", get(endpoints::dialog::generate))
        .route("/words", get(endpoints::words::extract))
        .route("/translate", post(endpoints::translate::translate))
        .route("/save-words", post(endpoints::save_words::save))
        .with_state(ctx)
}
