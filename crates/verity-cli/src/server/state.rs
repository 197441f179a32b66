//! Application state for the web server.

use std::sync::Arc;

use verity::Engine;

/// Shared application state.
///
/// The engine is immutable after construction; handlers clone the `Arc` into
/// `spawn_blocking` closures for the operations that do network I/O.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

impl AppState {
    /// Create new application state around an engine.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Check if LLM features are available.
    pub fn has_llm(&self) -> bool {
        self.engine.has_llm()
    }
}
