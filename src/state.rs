//! Shared application state for all routes.

use crate::repository::CustomerStore;
use crate::settings::Environment;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CustomerStore>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(store: impl CustomerStore + 'static, environment: Environment) -> Self {
        Self {
            store: Arc::new(store),
            environment,
        }
    }
}
