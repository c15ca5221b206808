//! Project/capability assignment rows

use serde::{Deserialize, Serialize};

use crate::core::Phase;

/// One (project, capability) assignment row of a program's projects file.
///
/// A project with several capabilities appears once per capability, sharing
/// all project-level fields. Capability domain and action stay as raw
/// strings here; the allocation pipeline normalizes them when it reads the
/// file back and must tolerate unknown values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRow {
    #[serde(rename = "Program Name")]
    pub program_name: String,

    #[serde(rename = "Project Name")]
    pub project_name: String,

    #[serde(rename = "Phase")]
    pub phase: Phase,

    #[serde(rename = "Delivery Period")]
    pub delivery_period: String,

    #[serde(rename = "Architect")]
    pub architect: String,

    /// Thousands-grouped euro amount, absent for roughly 30% of projects
    #[serde(rename = "Total Cost Estimation")]
    pub total_cost_estimation: Option<String>,

    #[serde(rename = "Capability Domain")]
    pub capability_domain: String,

    #[serde(rename = "Capability Name")]
    pub capability_name: String,

    #[serde(rename = "Action")]
    pub action: String,
}
