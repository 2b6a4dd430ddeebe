// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::store::TriviaStore;

pub type SharedStore = Arc<dyn TriviaStore>;

/// Shared application state; built once at startup and handed to the router.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: impl TriviaStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
