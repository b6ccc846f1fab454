use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchDoc { pub id: i32, pub area_id: i32, pub branch_name: String, pub is_active: bool }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBranchDoc {
    pub area_id: i32,
    pub branch_name: String,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkedBranchDoc { pub area_id: i32, pub branch_name: String, pub source_type_ids: Vec<i32> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceTypeEntryDoc {
    pub id: i32,
    /// Names to open under this source type, in order. May be omitted.
    pub source_names: Option<Vec<String>>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FullBranchDoc { pub area_id: i32, pub branch_name: String, pub source_types: Vec<SourceTypeEntryDoc> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBranchDoc { pub branch_id: i32 }

#[derive(Serialize, ToSchema)]
pub struct SourceTypeRefDoc { pub id: i32, pub name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceNameRefDoc { pub id: i32, pub name: String, pub source_type_id: i32 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchDetailsDoc {
    pub id: i32,
    pub area_id: i32,
    pub branch_name: String,
    pub is_active: bool,
    pub source_types: Vec<SourceTypeRefDoc>,
    pub source_names: Vec<SourceNameRefDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceNameDoc {
    pub id: i32,
    pub branch_id: i32,
    pub source_type_id: i32,
    pub source_name: String,
    pub is_active: bool,
    pub source_type_name: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceTypeDoc { pub id: i32, pub source_type: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSourceTypeDoc { pub source_type: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::branches::list,
        crate::routes::branches::create,
        crate::routes::branches::create_linked,
        crate::routes::branches::full_create,
        crate::routes::branches::details,
        crate::routes::branches::source_names,
        crate::routes::branches::all_source_names,
        crate::routes::branches::toggle_active,
        crate::routes::source_types::list,
        crate::routes::source_types::create,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            BranchDoc,
            NewBranchDoc,
            LinkedBranchDoc,
            SourceTypeEntryDoc,
            FullBranchDoc,
            CreatedBranchDoc,
            SourceTypeRefDoc,
            SourceNameRefDoc,
            BranchDetailsDoc,
            SourceNameDoc,
            SourceTypeDoc,
            NewSourceTypeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "branches"),
        (name = "source-types")
    )
)]
pub struct ApiDoc;
