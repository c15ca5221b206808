//! Flat row records as they appear in the generated spreadsheets
//!
//! Each struct maps one output row; serde renames carry the exact column
//! headers. Records are denormalized on purpose: project-level fields
//! repeat on every capability row.

pub mod allocation;
pub mod project;
pub mod team_capability;
pub mod team_member;

pub use allocation::AllocationRow;
pub use project::ProjectRow;
pub use team_capability::TeamCapabilityRow;
pub use team_member::TeamMemberRow;
