//! Customer CRUD handlers. Each request opens its own unit of work on the shared store.

use crate::error::AppError;
use crate::extractors::json::CustomerBody;
use crate::model::{project, Customer, CustomerInput, CustomerView};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

pub const CUSTOMERS_PATH: &str = "/customers";
pub const WITH_SECRETS_PATH: &str = "/customers/withsecrets";

fn location(id: i64) -> String {
    format!("{}/{}", CUSTOMERS_PATH, id)
}

#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses((status = 200, description = "All customers, secrets omitted", body = [CustomerView]))
)]
pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<CustomerView>>, AppError> {
    let mut repo = state.store.begin().await?;
    let customers = repo.list().await?;
    Ok(Json(customers.iter().map(project).collect()))
}

/// Only routed in development.
#[utoipa::path(
    get,
    path = "/customers/withsecrets",
    tag = "customers",
    responses((status = 200, description = "All customers including secrets (development only)", body = [Customer]))
)]
pub async fn list_customers_with_secrets(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let mut repo = state.store.begin().await?;
    Ok(Json(repo.list().await?))
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The customer, secret omitted", body = CustomerView),
        (status = 404, description = "No customer has this id")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerView>, AppError> {
    let mut repo = state.store.begin().await?;
    let customer = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    Ok(Json(project(&customer)))
}

#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CustomerInput,
    responses(
        (status = 201, description = "Created; the id is assigned by storage", body = CustomerView,
            headers(("Location" = String, description = "Path of the new customer"))),
        (status = 400, description = "Missing, malformed, or over-length fields")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    CustomerBody(input): CustomerBody,
) -> Result<impl IntoResponse, AppError> {
    let mut repo = state.store.begin_write().await?;
    let customer = repo.add(input).await?;
    repo.save().await?;
    tracing::info!(id = customer.id, "customer created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(customer.id))],
        Json(project(&customer)),
    ))
}

#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = CustomerInput,
    responses(
        (status = 204, description = "Replaced every field except the id"),
        (status = 400, description = "Missing, malformed, or over-length fields"),
        (status = 404, description = "No customer has this id")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    CustomerBody(input): CustomerBody,
) -> Result<StatusCode, AppError> {
    let mut repo = state.store.begin_write().await?;
    let mut customer = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    customer.replace_with(input);
    repo.replace(&customer).await?;
    repo.save().await?;
    tracing::info!(id, "customer replaced");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No customer has this id")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut repo = state.store.begin_write().await?;
    if repo.find(id).await?.is_none() {
        return Err(AppError::NotFound(id.to_string()));
    }
    repo.remove(id).await?;
    repo.save().await?;
    tracing::info!(id, "customer deleted");
    Ok(StatusCode::NO_CONTENT)
}
