use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{branch, errors::ModelError, source_type};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branch_source")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub branch_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub source_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Branch, SourceType }

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
        }
    }
}

impl Related<branch::Entity> for Entity {
    fn to() -> RelationDef { Relation::Branch.def() }
}

impl Related<source_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::SourceType.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, branch_id: i32, source_type_id: i32) -> Result<Model, ModelError> {
    let am = ActiveModel { branch_id: Set(branch_id), source_type_id: Set(source_type_id) };
    am.insert(db).await.map_err(ModelError::from_db)
}
