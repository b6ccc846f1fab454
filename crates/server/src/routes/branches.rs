use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use models::branch;
use service::branch::{
    BranchDetails, CreatedBranch, FullBranchInput, LinkedBranchInput, NewBranch, SourceNameRow,
};
use tracing::info;

use super::auth::{CurrentUser, ServerState};
use crate::errors::JsonApiError;

#[utoipa::path(
    get,
    path = "/api/branches",
    tag = "branches",
    responses(
        (status = 200, description = "All branches ordered by id", body = [crate::openapi::BranchDoc]),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<branch::Model>>, JsonApiError> {
    let items = state
        .branches
        .list()
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to get branches"))?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/branches",
    tag = "branches",
    request_body = crate::openapi::NewBranchDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BranchDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    payload: Result<Json<NewBranch>, JsonRejection>,
) -> Result<(StatusCode, Json<branch::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.branches.create(input).await?;
    info!(branch_id = created.id, by = %user.subject, "branch created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    post,
    path = "/api/branch",
    tag = "branches",
    request_body = crate::openapi::LinkedBranchDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedBranchDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_linked(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    payload: Result<Json<LinkedBranchInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedBranch>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.branches.create_linked(input).await?;
    info!(branch_id = created.branch_id, by = ?user.map(|u| u.subject), "linked branch created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    post,
    path = "/api/branch/full-create",
    tag = "branches",
    request_body = crate::openapi::FullBranchDoc,
    responses(
        (status = 201, description = "Branch and all dependent rows created", body = crate::openapi::CreatedBranchDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn full_create(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    payload: Result<Json<FullBranchInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedBranch>), JsonApiError> {
    let Json(input) = payload?;
    let names = input.name_count();
    let created = state.branches.full_create(input).await?;
    info!(branch_id = created.branch_id, names, by = ?user.map(|u| u.subject), "branch structure created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/branch/{id}/details",
    tag = "branches",
    params(("id" = i32, Path, description = "Branch id")),
    responses(
        (status = 200, description = "Branch with its source types and names", body = crate::openapi::BranchDetailsDoc),
        (status = 400, description = "Branch id is not an integer", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Branch not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn details(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<BranchDetails>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.branches.details(id).await?))
}

#[utoipa::path(
    get,
    path = "/api/branch/{id}/source-names",
    tag = "branches",
    params(("id" = i32, Path, description = "Branch id")),
    responses(
        (status = 200, description = "Source names opened under the branch", body = [crate::openapi::SourceNameDoc]),
        (status = 400, description = "Branch id is not an integer", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Branch not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn source_names(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<SourceNameRow>>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.branches.source_names(id).await?))
}

#[utoipa::path(
    get,
    path = "/api/branch-source-names",
    tag = "branches",
    responses(
        (status = 200, description = "Source names of every branch ordered by id", body = [crate::openapi::SourceNameDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn all_source_names(State(state): State<ServerState>) -> Result<Json<Vec<SourceNameRow>>, JsonApiError> {
    let rows = state
        .branches
        .list_all_source_names()
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to get source names"))?;
    Ok(Json(rows))
}

#[utoipa::path(
    put,
    path = "/api/branches/{id}/toggle-active",
    tag = "branches",
    params(("id" = i32, Path, description = "Branch id")),
    responses(
        (status = 200, description = "Branch after the toggle", body = crate::openapi::BranchDoc),
        (status = 400, description = "Branch id is not an integer", body = crate::openapi::ErrorDoc),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Branch not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn toggle_active(
    State(state): State<ServerState>,
    user: CurrentUser,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<branch::Model>, JsonApiError> {
    let Path(id) = id?;
    let updated = state
        .branches
        .toggle_active(id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to update branch status"))?;
    info!(branch_id = id, is_active = updated.is_active, by = %user.subject, "branch toggled");
    Ok(Json(updated))
}
