//! Persistence layer: SeaORM entities for branches and their sources,
//! field validation helpers and database connection setup.

pub mod errors;
pub mod db;
pub mod branch;
pub mod source_type;
pub mod branch_source;
pub mod source_name;
pub mod branch_source_name;

#[cfg(test)]
mod tests;
