//! Branch workflows: listing, creation (simple, linked, full), details and
//! active toggling.

pub mod domain;
pub mod service;

pub use domain::{
    BranchDetails, CreatedBranch, FullBranchInput, LinkedBranchInput, NewBranch, SourceNameRef,
    SourceNameRow, SourceTypeEntry, SourceTypeRef,
};
pub use service::BranchService;
