//! Application state shared across all handlers.

use po_compactor::Optimizer;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub optimizer: Arc<Optimizer>,
    pub start_time: Instant,
}

impl AppState {
    /// State with an optimizer that has no translator.
    pub fn new() -> Self {
        Self::with_optimizer(Arc::new(Optimizer::new()))
    }

    pub fn with_optimizer(optimizer: Arc<Optimizer>) -> Self {
        Self {
            optimizer,
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
