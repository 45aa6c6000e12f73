//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::PersonStore;
use crate::services::PersonService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// person service and the underlying store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    service: PersonService,
    store: Arc<dyn PersonStore>,
}

impl AppState {
    /// Create a new application state on top of a person store.
    #[must_use]
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        let service = PersonService::new(store.clone());

        Self {
            inner: Arc::new(AppStateInner { service, store }),
        }
    }

    /// Get a reference to the person service.
    #[must_use]
    pub fn service(&self) -> &PersonService {
        &self.inner.service
    }

    /// Get a reference to the person store.
    ///
    /// Handlers normally go through the service; the store is exposed for
    /// the readiness probe and the post-create roster log.
    #[must_use]
    pub fn store(&self) -> &dyn PersonStore {
        self.inner.store.as_ref()
    }
}
