pub mod auth;
pub mod branches;
pub mod source_types;

use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use configs::AuthPolicy;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the application router. Routes in `guarded` always require a token;
/// routes in `per_policy` only under [`AuthPolicy::Strict`].
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let guarded = Router::new()
        .route("/api/branches", get(branches::list).post(branches::create))
        .route("/api/branches/:id/toggle-active", put(branches::toggle_active))
        .route("/api/source-types", get(source_types::list).post(source_types::create))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_bearer_token));

    let mut per_policy = Router::new()
        .route("/api/branch", post(branches::create_linked))
        .route("/api/branch/full-create", post(branches::full_create))
        .route("/api/branch/:id/details", get(branches::details))
        .route("/api/branch/:id/source-names", get(branches::source_names))
        .route("/api/branch-source-names", get(branches::all_source_names));
    if state.auth.policy == AuthPolicy::Strict {
        per_policy = per_policy
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_bearer_token));
    }

    public
        .merge(guarded)
        .merge(per_policy)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
