//! Lookup indexes for the per-branch reads (details, source names).
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_branch_area")
                    .table(Branch::Table)
                    .col(Branch::AreaId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_source_name_branch_type")
                    .table(SourceName::Table)
                    .col(SourceName::BranchId)
                    .col(SourceName::SourceTypeId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_branch_source_name_source_name")
                    .table(BranchSourceName::Table)
                    .col(BranchSourceName::SourceNameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_branch_source_name_source_name").table(BranchSourceName::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_source_name_branch_type").table(SourceName::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_branch_area").table(Branch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Branch { Table, AreaId }

#[derive(DeriveIden)]
enum SourceName { Table, BranchId, SourceTypeId }

#[derive(DeriveIden)]
enum BranchSourceName { Table, SourceNameId }
