use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

fn default_true() -> bool { true }

/// Body of `POST /api/branches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBranch {
    pub area_id: i32,
    pub branch_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Body of `POST /api/branch`: a branch plus the source types it uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedBranchInput {
    pub area_id: i32,
    pub branch_name: String,
    pub source_type_ids: Vec<i32>,
}

/// Body of `POST /api/branch/full-create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullBranchInput {
    pub area_id: i32,
    pub branch_name: String,
    pub source_types: Vec<SourceTypeEntry>,
}

/// One source type of a full-create request with the names to open under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceTypeEntry {
    pub id: i32,
    #[serde(default)]
    pub source_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBranch {
    pub branch_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchDetails {
    pub id: i32,
    pub area_id: i32,
    pub branch_name: String,
    pub is_active: bool,
    pub source_types: Vec<SourceTypeRef>,
    pub source_names: Vec<SourceNameRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceTypeRef {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNameRef {
    pub id: i32,
    pub name: String,
    pub source_type_id: i32,
}

/// A source name row with its source type label, as listed per branch or
/// across all branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNameRow {
    pub id: i32,
    pub branch_id: i32,
    pub source_type_id: i32,
    pub source_name: String,
    pub is_active: bool,
    pub source_type_name: String,
}

/// A source type id may appear at most once per request.
pub(crate) fn ensure_distinct(ids: &[i32]) -> Result<(), ServiceError> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(ServiceError::Validation(format!("duplicate source type id {id}")));
        }
    }
    Ok(())
}

impl FullBranchInput {
    pub fn source_type_ids(&self) -> Vec<i32> {
        self.source_types.iter().map(|st| st.id).collect()
    }

    pub fn name_count(&self) -> usize {
        self.source_types.iter().map(|st| st.source_names.len()).sum()
    }
}
