use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use service::pagination::Window;
use service::validation::Validate;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::state::AppState;

pub mod categories;
pub mod hives;
pub mod products;
pub mod sections;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `start` / `amount` query parameters of paged lists.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub start: Option<i64>,
    pub amount: Option<i64>,
}

impl ListQuery {
    pub(crate) fn window(&self) -> Result<Window, JsonApiError> {
        Ok(Window::from_query(self.start, self.amount)?)
    }
}

/// Identifiers are positive; anything else is rejected before the service.
pub(crate) fn ensure_id(id: i32) -> Result<(), JsonApiError> {
    if id < 1 {
        return Err(JsonApiError::bad_request(format!("id must be a positive integer, got {}", id)));
    }
    Ok(())
}

/// Unwrap a JSON body and run its validation rules.
pub(crate) fn validated<T: Validate>(payload: Result<Json<T>, JsonRejection>) -> Result<T, JsonApiError> {
    let Json(request) = payload?;
    request.validate().into_result()?;
    Ok(request)
}

/// 201 with a `Location` header pointing at the new resource.
pub(crate) fn created<T: Serialize>(location: String, body: T) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response()
}

/// Build the full application router: API resources, health and the static front-end
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    let hives = Router::new()
        .route("/", get(hives::list).post(hives::create))
        .route("/:id", get(hives::get_one).put(hives::update).delete(hives::delete))
        .route("/:id/status/:deleted", put(hives::set_status))
        .route("/:id/sections", get(hives::list_sections));

    let sections = Router::new()
        .route("/", get(sections::list).post(sections::create))
        .route("/:id", get(sections::get_one).put(sections::update).delete(sections::delete))
        .route("/:id/status/:deleted", put(sections::set_status));

    let categories = Router::new()
        .route("/", get(categories::list).post(categories::create))
        .route("/:id", get(categories::get_one).put(categories::update).delete(categories::delete))
        .route("/:id/status/:deleted", put(categories::set_status))
        .route("/:id/products", get(categories::list_products));

    let products = Router::new()
        .route("/", get(products::list).post(products::create))
        .route("/:id", get(products::get_one).put(products::update).delete(products::delete))
        .route("/:id/status/:deleted", put(products::set_status));

    let api = Router::new()
        .nest("/api/hives", hives)
        .nest("/api/sections", sections)
        .nest("/api/categories", categories)
        .nest("/api/products", products);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request carrying method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
