//! Resource allocation rows

use serde::{Deserialize, Serialize};

use crate::core::{Action, CapabilityDomain};

/// One staffed person-slot for a capability assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRow {
    #[serde(rename = "Program Name")]
    pub program_name: String,

    #[serde(rename = "Project Name")]
    pub project_name: String,

    #[serde(rename = "Capability Domain")]
    pub capability_domain: CapabilityDomain,

    #[serde(rename = "Capability Name")]
    pub capability_name: String,

    #[serde(rename = "Action")]
    pub action: Action,

    #[serde(rename = "Job Function")]
    pub job_function: String,

    /// Whether the job function itself is a business or IT function,
    /// independent of the capability's domain
    #[serde(rename = "Resource Type")]
    pub resource_type: CapabilityDomain,

    /// Sequential label for same-function slots, e.g. "Test Engineer 2"
    #[serde(rename = "Resource Number")]
    pub resource_number: String,

    #[serde(rename = "Estimated Man/Days")]
    pub estimated_man_days: u32,

    /// Task list joined with "; "
    #[serde(rename = "Tasks")]
    pub tasks: String,
}
