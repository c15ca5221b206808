//! Portfolio Forge
//!
//! A CLI for fabricating synthetic spreadsheet data for a fictitious
//! banking IT portfolio: programs and projects, resource allocations,
//! team rosters, and team-to-capability mappings.

pub mod catalog;
pub mod cli;
pub mod core;
pub mod entities;
pub mod generators;
