//! Create `branch_source` join table linking branches to source types.
//! The composite primary key keeps each pair unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BranchSource::Table)
                    .if_not_exists()
                    .col(integer(BranchSource::BranchId))
                    .col(integer(BranchSource::SourceTypeId))
                    .primary_key(
                        Index::create()
                            .name("pk_branch_source")
                            .col(BranchSource::BranchId)
                            .col(BranchSource::SourceTypeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branch_source_branch")
                            .from(BranchSource::Table, BranchSource::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branch_source_source_type")
                            .from(BranchSource::Table, BranchSource::SourceTypeId)
                            .to(SourceType::Table, SourceType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BranchSource::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BranchSource { Table, BranchId, SourceTypeId }

#[derive(DeriveIden)]
enum Branch { Table, Id }

#[derive(DeriveIden)]
enum SourceType { Table, Id }
