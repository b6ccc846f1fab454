use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{branch, errors::ModelError, source_name};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branch_source_name")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub branch_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub source_name_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Branch, SourceName }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Branch => Entity::belongs_to(branch::Entity)
                .from(Column::BranchId)
                .to(branch::Column::Id)
                .into(),
            Relation::SourceName => Entity::belongs_to(source_name::Entity)
                .from(Column::SourceNameId)
                .to(source_name::Column::Id)
                .into(),
        }
    }
}

impl Related<branch::Entity> for Entity {
    fn to() -> RelationDef { Relation::Branch.def() }
}

impl Related<source_name::Entity> for Entity {
    fn to() -> RelationDef { Relation::SourceName.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, branch_id: i32, source_name_id: i32) -> Result<Model, ModelError> {
    let am = ActiveModel { branch_id: Set(branch_id), source_name_id: Set(source_name_id) };
    am.insert(db).await.map_err(ModelError::from_db)
}
