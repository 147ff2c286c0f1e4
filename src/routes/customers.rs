//! Customer CRUD routes. The secret-listing route exists only in development.

use crate::handlers::customers::{
    create_customer, delete_customer, get_customer, list_customers, list_customers_with_secrets,
    update_customer, CUSTOMERS_PATH, WITH_SECRETS_PATH,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn customer_routes(state: AppState) -> Router {
    let mut router = Router::new()
        .route(CUSTOMERS_PATH, get(list_customers).post(create_customer))
        .route("/customers/", get(list_customers).post(create_customer))
        .route(
            "/customers/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        );
    if state.environment.is_development() {
        tracing::warn!(path = WITH_SECRETS_PATH, "development environment: secret listing enabled");
        router = router.route(WITH_SECRETS_PATH, get(list_customers_with_secrets));
    }
    router.with_state(state)
}
