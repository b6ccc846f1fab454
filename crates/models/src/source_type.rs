use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{branch_source, errors::ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "source_type")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub source_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { BranchSource }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::BranchSource => Entity::has_many(branch_source::Entity).into(),
        }
    }
}

impl Related<branch_source::Entity> for Entity {
    fn to() -> RelationDef { Relation::BranchSource.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_label(label: &str) -> Result<String, ModelError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation("sourceType must not be empty".into()));
    }
    if trimmed.chars().count() > 128 {
        return Err(ModelError::Validation("sourceType longer than 128 characters".into()));
    }
    Ok(trimmed.to_string())
}

pub async fn create<C: ConnectionTrait>(db: &C, label: &str) -> Result<Model, ModelError> {
    let label = validate_label(label)?;
    let am = ActiveModel { source_type: Set(label), ..Default::default() };
    am.insert(db).await.map_err(ModelError::from_db)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Entity::find().order_by_asc(Column::Id).all(db).await.map_err(ModelError::from_db)
}

/// Ids from `ids` that have no `source_type` row.
pub async fn missing_ids<C: ConnectionTrait>(db: &C, ids: &[i32]) -> Result<Vec<i32>, ModelError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let found: Vec<i32> = Entity::find()
        .filter(Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await
        .map_err(ModelError::from_db)?
        .into_iter()
        .map(|m| m.id)
        .collect();
    Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
}
