use models::{branch, branch_source, branch_source_name, source_name, source_type};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use tracing::{error, info, instrument, warn};

use super::domain::{
    ensure_distinct, BranchDetails, CreatedBranch, FullBranchInput, LinkedBranchInput, NewBranch,
    SourceNameRef, SourceNameRow, SourceTypeRef,
};
use crate::errors::ServiceError;

/// Branch workflows over an injected connection pool.
///
/// Every mutating operation runs inside one database transaction: either all
/// rows of a request become visible or none do.
#[derive(Clone)]
pub struct BranchService {
    db: DatabaseConnection,
}

impl BranchService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// All branches in primary-key order.
    pub async fn list(&self) -> Result<Vec<branch::Model>, ServiceError> {
        let rows = branch::Entity::find()
            .order_by_asc(branch::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    #[instrument(skip(self, input), fields(area_id = input.area_id))]
    pub async fn create(&self, input: NewBranch) -> Result<branch::Model, ServiceError> {
        let name = branch::validate_branch_name(&input.branch_name)?;
        let txn = self.db.begin().await?;
        let res = branch::create(&txn, input.area_id, &name, input.is_active)
            .await
            .map_err(ServiceError::from);
        let created = finish(txn, res).await?;
        info!(branch_id = created.id, branch_name = %created.branch_name, "branch_created");
        Ok(created)
    }

    /// Create a branch and link it to existing source types.
    #[instrument(skip(self, input), fields(area_id = input.area_id, source_types = input.source_type_ids.len()))]
    pub async fn create_linked(&self, input: LinkedBranchInput) -> Result<CreatedBranch, ServiceError> {
        let name = branch::validate_branch_name(&input.branch_name)?;
        ensure_distinct(&input.source_type_ids)?;

        let txn = self.db.begin().await?;
        let res = async {
            ensure_source_types_exist(&txn, &input.source_type_ids).await?;
            let created = branch::create(&txn, input.area_id, &name, true).await?;
            for st_id in &input.source_type_ids {
                branch_source::create(&txn, created.id, *st_id).await?;
            }
            Ok::<_, ServiceError>(created.id)
        }
        .await;
        let branch_id = finish(txn, res).await?;
        info!(branch_id, "linked_branch_created");
        Ok(CreatedBranch { branch_id })
    }

    /// Create a branch with its source types and the source names under each.
    ///
    /// Entries and names are inserted in the order given; each source name row
    /// is inserted before the branch link that references its generated id.
    #[instrument(skip(self, input), fields(area_id = input.area_id, source_types = input.source_types.len(), source_names = input.name_count()))]
    pub async fn full_create(&self, input: FullBranchInput) -> Result<CreatedBranch, ServiceError> {
        let name = branch::validate_branch_name(&input.branch_name)?;
        let type_ids = input.source_type_ids();
        ensure_distinct(&type_ids)?;
        let mut entries = Vec::with_capacity(input.source_types.len());
        for entry in &input.source_types {
            let names = entry
                .source_names
                .iter()
                .map(|n| source_name::validate_source_name(n))
                .collect::<Result<Vec<_>, _>>()?;
            entries.push((entry.id, names));
        }

        let txn = self.db.begin().await?;
        let res = async {
            ensure_source_types_exist(&txn, &type_ids).await?;
            let created = branch::create(&txn, input.area_id, &name, true).await?;
            for (st_id, names) in &entries {
                branch_source::create(&txn, created.id, *st_id).await?;
                for sn in names {
                    let row = source_name::create(&txn, created.id, *st_id, sn).await?;
                    branch_source_name::create(&txn, created.id, row.id).await?;
                }
            }
            Ok::<_, ServiceError>(created.id)
        }
        .await;
        let branch_id = finish(txn, res).await?;
        info!(branch_id, "full_branch_created");
        Ok(CreatedBranch { branch_id })
    }

    /// The branch with its linked source types and source names.
    pub async fn details(&self, id: i32) -> Result<BranchDetails, ServiceError> {
        let found = branch::find(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Branch"))?;

        let source_types = branch_source::Entity::find()
            .filter(branch_source::Column::BranchId.eq(id))
            .order_by_asc(branch_source::Column::SourceTypeId)
            .find_also_related(source_type::Entity)
            .all(&self.db)
            .await?
            .into_iter()
            .filter_map(|(link, st)| match st {
                Some(st) => Some(SourceTypeRef { id: link.source_type_id, name: st.source_type }),
                None => {
                    warn!(branch_id = id, source_type_id = link.source_type_id, "dangling branch_source row");
                    None
                }
            })
            .collect();

        let source_names = branch_source_name::Entity::find()
            .filter(branch_source_name::Column::BranchId.eq(id))
            .order_by_asc(branch_source_name::Column::SourceNameId)
            .find_also_related(source_name::Entity)
            .all(&self.db)
            .await?
            .into_iter()
            .filter_map(|(link, sn)| match sn {
                Some(sn) => Some(SourceNameRef {
                    id: link.source_name_id,
                    name: sn.source_name,
                    source_type_id: sn.source_type_id,
                }),
                None => {
                    warn!(branch_id = id, source_name_id = link.source_name_id, "dangling branch_source_name row");
                    None
                }
            })
            .collect();

        Ok(BranchDetails {
            id: found.id,
            area_id: found.area_id,
            branch_name: found.branch_name,
            is_active: found.is_active,
            source_types,
            source_names,
        })
    }

    /// Source name rows owned by the branch, with their source type labels.
    pub async fn source_names(&self, id: i32) -> Result<Vec<SourceNameRow>, ServiceError> {
        if branch::find(&self.db, id).await?.is_none() {
            return Err(ServiceError::not_found("Branch"));
        }
        self.source_name_rows(Some(id)).await
    }

    /// Source name rows of every branch, ordered by id.
    pub async fn list_all_source_names(&self) -> Result<Vec<SourceNameRow>, ServiceError> {
        self.source_name_rows(None).await
    }

    async fn source_name_rows(&self, branch_id: Option<i32>) -> Result<Vec<SourceNameRow>, ServiceError> {
        let mut query = source_name::Entity::find();
        if let Some(id) = branch_id {
            query = query.filter(source_name::Column::BranchId.eq(id));
        }
        let rows = query
            .order_by_asc(source_name::Column::Id)
            .find_also_related(source_type::Entity)
            .all(&self.db)
            .await?
            .into_iter()
            .filter_map(|(sn, st)| match st {
                Some(st) => Some(SourceNameRow {
                    id: sn.id,
                    branch_id: sn.branch_id,
                    source_type_id: sn.source_type_id,
                    source_name: sn.source_name,
                    is_active: sn.is_active,
                    source_type_name: st.source_type,
                }),
                None => {
                    warn!(source_name_id = sn.id, source_type_id = sn.source_type_id, "dangling source_name row");
                    None
                }
            })
            .collect();
        Ok(rows)
    }

    /// Flip `isActive` and return the updated branch.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: i32) -> Result<branch::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let res = async {
            if branch::toggle_active(&txn, id).await? == 0 {
                return Err(ServiceError::not_found("Branch"));
            }
            let updated = branch::find(&txn, id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Branch"))?;
            Ok::<_, ServiceError>(updated)
        }
        .await;
        let updated = finish(txn, res).await?;
        info!(branch_id = updated.id, is_active = updated.is_active, "branch_active_toggled");
        Ok(updated)
    }
}

async fn ensure_source_types_exist<C: ConnectionTrait>(db: &C, ids: &[i32]) -> Result<(), ServiceError> {
    let missing = source_type::missing_ids(db, ids).await?;
    if missing.is_empty() {
        return Ok(());
    }
    let list = missing.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ");
    Err(ServiceError::Validation(format!("unknown source type id(s): {list}")))
}

/// Commit on success, roll back on failure; the operation error wins over a
/// rollback failure.
async fn finish<T>(txn: DatabaseTransaction, res: Result<T, ServiceError>) -> Result<T, ServiceError> {
    match res {
        Ok(v) => {
            txn.commit().await?;
            Ok(v)
        }
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                error!(err = %rb, "rollback failed");
            }
            Err(e)
        }
    }
}
