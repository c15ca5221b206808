//! CLI command implementations

pub mod mappings;
pub mod programs;
pub mod resources;
pub mod teams;
