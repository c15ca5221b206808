//! Core module - fundamental types and utilities

pub mod domain;
pub mod layout;
pub mod store;

pub use domain::{Action, CapabilityDomain, ParseEnumError, Phase};
pub use layout::{sanitize_project_name, DataLayout};
pub use store::{CsvStore, StoreError};
