#![cfg(test)]
use configs::DatabaseConfig;
use models::source_type;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the full schema; one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_and_migrate(&DatabaseConfig::in_memory()).await
}

pub async fn seed_source_types(db: &DatabaseConnection, labels: &[&str]) -> Result<Vec<source_type::Model>, anyhow::Error> {
    let mut out = Vec::with_capacity(labels.len());
    for label in labels {
        out.push(source_type::create(db, label).await?);
    }
    Ok(out)
}
