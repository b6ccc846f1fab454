//! Create `branch_source_name` join table linking branches to source names.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BranchSourceName::Table)
                    .if_not_exists()
                    .col(integer(BranchSourceName::BranchId))
                    .col(integer(BranchSourceName::SourceNameId))
                    .primary_key(
                        Index::create()
                            .name("pk_branch_source_name")
                            .col(BranchSourceName::BranchId)
                            .col(BranchSourceName::SourceNameId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branch_source_name_branch")
                            .from(BranchSourceName::Table, BranchSourceName::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branch_source_name_source_name")
                            .from(BranchSourceName::Table, BranchSourceName::SourceNameId)
                            .to(SourceName::Table, SourceName::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BranchSourceName::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BranchSourceName { Table, BranchId, SourceNameId }

#[derive(DeriveIden)]
enum Branch { Table, Id }

#[derive(DeriveIden)]
enum SourceName { Table, Id }
