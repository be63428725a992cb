//! Shared state for the API layer.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::api::ApiError;
use crate::llm::LlmClient;

/// Shared context for all routes: the database handle and the
/// text-generation client, both injected at construction time.
///
/// The connection is wrapped in a `Mutex` so it is safe for concurrent
/// in-flight requests; guards are held only for straight-line statement
/// runs and never across awaits.
#[derive(Clone)]
pub struct ApiContext {
    db: Arc<Mutex<Connection>>,
    pub llm: Arc<dyn LlmClient>,
}

impl ApiContext {
    pub fn new(conn: Connection, llm: Arc<dyn LlmClient>) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            llm,
        }
    }

    pub fn db(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.db
            .lock()
            .map_err(|_| ApiError::Internal("database lock poisoned".into()))
    }
}
