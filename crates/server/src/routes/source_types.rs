use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use models::source_type;
use service::source_type_service::NewSourceType;
use tracing::info;

use super::auth::{CurrentUser, ServerState};
use crate::errors::JsonApiError;

#[utoipa::path(
    get,
    path = "/api/source-types",
    tag = "source-types",
    responses(
        (status = 200, description = "All source types ordered by id", body = [crate::openapi::SourceTypeDoc]),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<source_type::Model>>, JsonApiError> {
    let items = state
        .source_types
        .list()
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to get source types"))?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/source-types",
    tag = "source-types",
    request_body = crate::openapi::NewSourceTypeDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SourceTypeDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Label already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    payload: Result<Json<NewSourceType>, JsonRejection>,
) -> Result<(StatusCode, Json<source_type::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.source_types.create(input).await?;
    info!(source_type_id = created.id, label = %created.source_type, by = %user.subject, "source type created");
    Ok((StatusCode::CREATED, Json(created)))
}
