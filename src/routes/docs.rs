//! API documentation: the OpenAPI JSON and a Swagger UI page that renders it.

use crate::openapi::{api_doc, DOCUMENT_NAME};
use crate::settings::Environment;
use axum::{extract::State, response::Html, routing::get, Json, Router};
use std::sync::Arc;
use utoipa::openapi::OpenApi;

pub const SWAGGER_PATH: &str = "/swagger";

pub fn document_path() -> String {
    format!("{}/{}/swagger.json", SWAGGER_PATH, DOCUMENT_NAME)
}

async fn document(State(doc): State<Arc<OpenApi>>) -> Json<OpenApi> {
    Json(doc.as_ref().clone())
}

fn swagger_page(document_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{ url: "{url}", dom_id: "#swagger-ui", docExpansion: "list" }});
  </script>
</body>
</html>
"##,
        title = DOCUMENT_NAME,
        url = document_url
    )
}

pub fn docs_routes(environment: Environment) -> Router {
    let doc = Arc::new(api_doc(environment));
    let page = Html(swagger_page(&document_path()));
    Router::new()
        .route(&document_path(), get(document))
        .route(SWAGGER_PATH, get(move || async move { page }))
        .with_state(doc)
}
