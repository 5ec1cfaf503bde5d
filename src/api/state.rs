//! Application state for the wage/CPI comparison API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{AgencyDataset, DatasetLoader};

/// Shared application state.
///
/// Holds the reference dataset, loaded once at start-up and only read
/// afterwards, so concurrent requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded reference data.
    loader: Arc<DatasetLoader>,
}

impl AppState {
    /// Creates a new application state with the given dataset loader.
    pub fn new(loader: DatasetLoader) -> Self {
        Self {
            loader: Arc::new(loader),
        }
    }

    /// Returns a reference to the dataset loader.
    pub fn loader(&self) -> &DatasetLoader {
        &self.loader
    }

    /// Returns a reference to the reference dataset.
    pub fn dataset(&self) -> &AgencyDataset {
        self.loader.dataset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }
}
