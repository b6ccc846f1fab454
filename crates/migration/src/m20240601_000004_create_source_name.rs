//! Create `source_name` table.
//! Named sources owned by a branch under one source type.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SourceName::Table)
                    .if_not_exists()
                    .col(pk_auto(SourceName::Id))
                    .col(integer(SourceName::BranchId))
                    .col(integer(SourceName::SourceTypeId))
                    .col(string_len(SourceName::SourceName, 128))
                    .col(boolean(SourceName::IsActive).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_source_name_branch")
                            .from(SourceName::Table, SourceName::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_source_name_source_type")
                            .from(SourceName::Table, SourceName::SourceTypeId)
                            .to(SourceType::Table, SourceType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SourceName::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SourceName { Table, Id, BranchId, SourceTypeId, SourceName, IsActive }

#[derive(DeriveIden)]
enum Branch { Table, Id }

#[derive(DeriveIden)]
enum SourceType { Table, Id }
