//! Service layer providing the branch workflows on top of models.
//! - Separates business rules (validation, transactions) from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Independent of the web framework; handlers only translate errors to statuses.

pub mod errors;
pub mod branch;
pub mod source_type_service;
#[cfg(test)]
pub mod test_support;

pub use branch::BranchService;
pub use source_type_service::SourceTypeService;
