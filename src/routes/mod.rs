//! Router assembly.

mod common;
mod customers;
mod docs;

pub use common::{common_routes, ROOT_MESSAGE};
pub use customers::customer_routes;
pub use docs::{docs_routes, document_path, SWAGGER_PATH};

use crate::error::developer_diagnostics;
use crate::state::AppState;
use axum::{middleware, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router with body limit and request tracing.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    let environment = state.environment;
    let mut router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(customer_routes(state))
        .merge(docs_routes(environment));
    if environment.is_development() {
        router = router.layer(middleware::from_fn(developer_diagnostics));
    }
    router
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
