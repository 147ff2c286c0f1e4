//! OpenAPI document built from the handler annotations.

use crate::handlers::customers::{self, WITH_SECRETS_PATH};
use crate::model::{Customer, CustomerInput, CustomerView};
use crate::settings::Environment;
use utoipa::OpenApi;

pub const DOCUMENT_NAME: &str = "CustomerAPI";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CustomerAPI v1",
        version = "v1",
        description = "Create, read, update, and delete customers. Secrets are accepted on write but never returned."
    ),
    paths(
        customers::list_customers,
        customers::list_customers_with_secrets,
        customers::get_customer,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
    ),
    components(schemas(Customer, CustomerInput, CustomerView)),
    tags((name = "customers", description = "Customer records"))
)]
pub struct ApiDoc;

/// Document for the given environment; the secret-listing path is only described where it is routed.
pub fn api_doc(environment: Environment) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if !environment.is_development() {
        doc.paths.paths.remove(WITH_SECRETS_PATH);
    }
    doc
}
