//! JSON body extractor for customer payloads: binding failures become 400, then field rules run.

use crate::error::AppError;
use crate::model::CustomerInput;
use crate::validation::RequestValidator;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};

/// Validated create/update body.
#[derive(Clone, Debug)]
pub struct CustomerBody(pub CustomerInput);

#[async_trait]
impl<S> FromRequest<S> for CustomerBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<CustomerInput>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        RequestValidator::validate(&input)?;
        Ok(CustomerBody(input))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge;
    }
    AppError::BadRequest(rejection.body_text())
}
