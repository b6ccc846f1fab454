//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_branch;
mod m20240601_000002_create_source_type;
mod m20240601_000003_create_branch_source;
mod m20240601_000004_create_source_name;
mod m20240601_000005_create_branch_source_name;
mod m20240601_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_branch::Migration),
            Box::new(m20240601_000002_create_source_type::Migration),
            Box::new(m20240601_000003_create_branch_source::Migration),
            Box::new(m20240601_000004_create_source_name::Migration),
            Box::new(m20240601_000005_create_branch_source_name::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000006_add_indexes::Migration),
        ]
    }
}
