use models::source_type;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::errors::ServiceError;

/// Body of `POST /api/source-types`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSourceType {
    pub source_type: String,
}

/// Reference data the branch workflows link against.
#[derive(Clone)]
pub struct SourceTypeService {
    db: DatabaseConnection,
}

impl SourceTypeService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn list(&self) -> Result<Vec<source_type::Model>, ServiceError> {
        Ok(source_type::list(&self.db).await?)
    }

    /// Labels are unique; a repeat yields `Conflict`.
    #[instrument(skip(self, input), fields(source_type = %input.source_type))]
    pub async fn create(&self, input: NewSourceType) -> Result<source_type::Model, ServiceError> {
        let created = source_type::create(&self.db, &input.source_type).await?;
        info!(source_type_id = created.id, "source_type_created");
        Ok(created)
    }
}
