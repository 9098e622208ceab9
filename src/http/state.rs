//! Application state for the HTTP server.

use crate::core::reading::ReadingEngine;
use std::sync::Arc;

/// Shared state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ReadingEngine>,
}

impl AppState {
    pub fn new(engine: ReadingEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
