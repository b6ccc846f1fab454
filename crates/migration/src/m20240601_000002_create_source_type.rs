//! Create `source_type` table.
//! Reference labels a branch can be linked to.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SourceType::Table)
                    .if_not_exists()
                    .col(pk_auto(SourceType::Id))
                    .col(string_len(SourceType::SourceType, 128).unique_key())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SourceType::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SourceType { Table, Id, SourceType }
