use sea_orm::{entity::prelude::*, sea_query::Expr, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{branch_source, branch_source_name, errors::ModelError, source_name};

pub const MAX_BRANCH_NAME_LEN: usize = 128;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branch")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub area_id: i32,
    pub branch_name: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { BranchSource, SourceName, BranchSourceName }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::BranchSource => Entity::has_many(branch_source::Entity).into(),
            Relation::SourceName => Entity::has_many(source_name::Entity).into(),
            Relation::BranchSourceName => Entity::has_many(branch_source_name::Entity).into(),
        }
    }
}

impl Related<branch_source::Entity> for Entity {
    fn to() -> RelationDef { Relation::BranchSource.def() }
}

impl Related<source_name::Entity> for Entity {
    fn to() -> RelationDef { Relation::SourceName.def() }
}

impl Related<branch_source_name::Entity> for Entity {
    fn to() -> RelationDef { Relation::BranchSourceName.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Trim and bound-check a branch name.
pub fn validate_branch_name(name: &str) -> Result<String, ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation("branchName must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_BRANCH_NAME_LEN {
        return Err(ModelError::Validation(format!("branchName longer than {MAX_BRANCH_NAME_LEN} characters")));
    }
    Ok(trimmed.to_string())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    area_id: i32,
    branch_name: &str,
    is_active: bool,
) -> Result<Model, ModelError> {
    let branch_name = validate_branch_name(branch_name)?;
    let am = ActiveModel {
        area_id: Set(area_id),
        branch_name: Set(branch_name),
        is_active: Set(is_active),
        ..Default::default()
    };
    am.insert(db).await.map_err(ModelError::from_db)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(ModelError::from_db)
}

/// Flip `is_active` in a single statement; returns the number of rows touched.
pub async fn toggle_active<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, ModelError> {
    let res = Entity::update_many()
        .col_expr(Column::IsActive, Expr::col(Column::IsActive).not())
        .filter(Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(ModelError::from_db)?;
    Ok(res.rows_affected)
}
