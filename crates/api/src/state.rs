//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Generic over the store so the same router
/// serves `PostgreSQL` in production and the in-memory store in tests.
#[derive(Clone)]
pub struct AppState<S: Store> {
    inner: Arc<AppStateInner<S>>,
}

struct AppStateInner<S> {
    config: ApiConfig,
    store: S,
}

impl<S: Store> AppState<S> {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ApiConfig, store: S) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the store handle.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.inner.store
    }
}
