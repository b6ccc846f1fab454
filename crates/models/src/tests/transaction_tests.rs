use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};

use super::setup_test_db;
use crate::{branch, branch_source, source_type};

#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = branch::create(&txn, 1, "Committed", true).await?;
    txn.commit().await?;

    let found = branch::find(&db, created.id).await?;
    assert_eq!(found.map(|b| b.branch_name), Some("Committed".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;
    let cash = source_type::create(&db, "Cash").await?;

    let txn = db.begin().await?;
    let created = branch::create(&txn, 1, "Discarded", true).await?;
    branch_source::create(&txn, created.id, cash.id).await?;
    txn.rollback().await?;

    assert!(branch::find(&db, created.id).await?.is_none());
    assert_eq!(branch_source::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_dropped_transaction_rolls_back() -> Result<()> {
    let db = setup_test_db().await?;
    {
        let txn = db.begin().await?;
        branch::create(&txn, 1, "Dropped", true).await?;
    }
    assert_eq!(branch::Entity::find().count(&db).await?, 0);
    Ok(())
}
