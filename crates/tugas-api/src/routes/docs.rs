use axum::response::Html;
use axum::Json;
use serde_json::Value;

use crate::openapi;

/// Interactive rendering of `/api/swagger.json` via Swagger UI.
const DOCS_PAGE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Tugas API Documentation</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({
        url: "/api/swagger.json",
        dom_id: "#swagger-ui",
      });
    };
  </script>
</body>
</html>
"##;

pub async fn swagger_json() -> Json<Value> {
    Json(openapi::document())
}

pub async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}
