use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{branch, branch_source_name, errors::ModelError, source_type};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "source_name")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub branch_id: i32,
    pub source_type_id: i32,
    pub source_name: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Branch, SourceType, BranchSourceName }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Branch => Entity::belongs_to(branch::Entity)
                .from(Column::BranchId)
                .to(branch::Column::Id)
                .into(),
            Relation::SourceType => Entity::belongs_to(source_type::Entity)
                .from(Column::SourceTypeId)
                .to(source_type::Column::Id)
                .into(),
            Relation::BranchSourceName => Entity::has_many(branch_source_name::Entity).into(),
        }
    }
}

impl Related<branch::Entity> for Entity {
    fn to() -> RelationDef { Relation::Branch.def() }
}

impl Related<source_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::SourceType.def() }
}

impl Related<branch_source_name::Entity> for Entity {
    fn to() -> RelationDef { Relation::BranchSourceName.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Blank names are rejected; anything else is stored exactly as sent.
pub fn validate_source_name(name: &str) -> Result<String, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("sourceNames entries must not be empty".into()));
    }
    if name.chars().count() > 128 {
        return Err(ModelError::Validation(format!("source name `{name}` longer than 128 characters")));
    }
    Ok(name.to_string())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    branch_id: i32,
    source_type_id: i32,
    name: &str,
) -> Result<Model, ModelError> {
    let name = validate_source_name(name)?;
    let am = ActiveModel {
        branch_id: Set(branch_id),
        source_type_id: Set(source_type_id),
        source_name: Set(name),
        is_active: Set(true),
        ..Default::default()
    };
    am.insert(db).await.map_err(ModelError::from_db)
}

pub async fn list_by_branch<C: ConnectionTrait>(db: &C, branch_id: i32) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::BranchId.eq(branch_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(ModelError::from_db)
}
