
/// Transaction commit/rollback behaviour
pub mod transaction_tests;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory database per test.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    crate::db::connect_and_migrate(&DatabaseConfig::in_memory()).await
}
