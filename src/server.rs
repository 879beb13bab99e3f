//! HTTP surface of the product page.

use crate::{render_error, render_not_found, ProductPage, ProductView};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

pub struct AppState {
    pub view: ProductView,
    /// Freshness window sent as `Cache-Control: max-age`.
    pub revalidate: Duration,
}

/// Builds the router serving `/shopping/product/{id}`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        .route("/shopping/product/{id}", get(product_page))
        .with_state(state)
        // Logging layer: method + path + status + latency
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

async fn product_page(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.view.render(&id).await {
        Ok(ProductPage::Found(document)) => {
            let cache_control = format!("public, max-age={}", state.revalidate.as_secs());
            let mut response = Html(document).into_response();
            if let Ok(value) = HeaderValue::from_str(&cache_control) {
                response.headers_mut().insert(header::CACHE_CONTROL, value);
            }
            response
        }
        Ok(ProductPage::NotFound) => (StatusCode::NOT_FOUND, Html(render_not_found())).into_response(),
        Err(e) => {
            warn!(error = ?e, id = %id, "Failed to load product");
            (StatusCode::BAD_GATEWAY, Html(render_error())).into_response()
        }
    }
}
