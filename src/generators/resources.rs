//! Resource allocation generator
//!
//! Consumes capability assignment rows produced by the projects pipeline
//! and synthesizes staffed person-slots per capability. Lookups that fail
//! recover locally: an unknown capability domain defaults to IT with a
//! warning, an unknown action or job function skips the slot. The run
//! itself never fails once input rows exist.

use std::collections::HashMap;

use console::style;
use rand::Rng;

use crate::catalog::patterns::{
    self, BUSINESS_FUNCTIONS, BUSINESS_RATIO_MAX, BUSINESS_RATIO_MIN, IT_FUNCTIONS,
};
use crate::core::{Action, CapabilityDomain};
use crate::entities::{AllocationRow, ProjectRow};

/// Global people-budget cap apportioned across a project's capabilities.
/// Best-effort: the per-capability floor clamps to a minimum of 1, so a
/// project with very many capabilities can nominally exceed it.
pub const MAX_PEOPLE_PER_PROJECT: usize = 40;

/// All allocations for one project, ready to be written as one file
#[derive(Debug)]
pub struct ProjectAllocation {
    pub project_name: String,
    pub rows: Vec<AllocationRow>,
}

/// Allocate resources for every project found in the assignment rows.
/// Projects keep their first-seen input order.
pub fn allocate(assignments: &[ProjectRow], rng: &mut impl Rng) -> Vec<ProjectAllocation> {
    group_by_project(assignments)
        .into_iter()
        .map(|(project_name, capabilities)| {
            let rows = allocate_project(&capabilities, rng);
            ProjectAllocation { project_name, rows }
        })
        .collect()
}

/// Group assignment rows by project name, preserving first-seen order
pub(crate) fn group_by_project(rows: &[ProjectRow]) -> Vec<(String, Vec<&ProjectRow>)> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&ProjectRow>> = HashMap::new();
    for row in rows {
        let entry = groups.entry(&row.project_name).or_default();
        if entry.is_empty() {
            order.push(&row.project_name);
        }
        entry.push(row);
    }
    order
        .into_iter()
        .map(|name| (name.to_string(), groups.remove(name).unwrap_or_default()))
        .collect()
}

fn allocate_project(capabilities: &[&ProjectRow], rng: &mut impl Rng) -> Vec<AllocationRow> {
    let mut rows = Vec::new();
    for capability in capabilities {
        allocate_capability(capability, capabilities.len(), rng, &mut rows);
    }
    rows
}

fn allocate_capability(
    assignment: &ProjectRow,
    capabilities_in_project: usize,
    rng: &mut impl Rng,
    out: &mut Vec<AllocationRow>,
) {
    let domain = match assignment.capability_domain.parse::<CapabilityDomain>() {
        Ok(domain) => domain,
        Err(_) => {
            eprintln!(
                "{} unknown capability domain {:?} for project {:?}, defaulting to IT",
                style("!").yellow(),
                assignment.capability_domain,
                assignment.project_name
            );
            CapabilityDomain::It
        }
    };
    let action = match assignment.action.parse::<Action>() {
        Ok(action) => action,
        Err(_) => {
            eprintln!(
                "{} unknown action {:?} for capability {:?}, skipping",
                style("!").yellow(),
                assignment.action,
                assignment.capability_name
            );
            return;
        }
    };

    let pattern = patterns::resolve_pattern(&assignment.capability_name, domain, action);

    let budget = people_budget(capabilities_in_project, rng);
    let (business_count, it_count) = split_budget(budget, rng);

    let staffing = distribute_functions(business_count, BUSINESS_FUNCTIONS, rng)
        .into_iter()
        .chain(distribute_functions(it_count, IT_FUNCTIONS, rng));

    for (function, count) in staffing {
        let Some(role) = patterns::default_role(function) else {
            eprintln!(
                "{} no default role for job function {:?}, skipping slot",
                style("!").yellow(),
                function
            );
            continue;
        };
        let tasks = pattern.tasks_for(function).unwrap_or(role.tasks).join("; ");

        for slot in 1..=count {
            let (min_days, max_days) = role.man_days;
            let days = rng.random_range(min_days..=max_days);
            let estimated_man_days = (f64::from(days) * action.multiplier()).floor() as u32;

            out.push(AllocationRow {
                program_name: assignment.program_name.clone(),
                project_name: assignment.project_name.clone(),
                capability_domain: domain,
                capability_name: assignment.capability_name.clone(),
                action,
                job_function: function.to_string(),
                resource_type: resource_type_of(function),
                resource_number: format!("{function} {slot}"),
                estimated_man_days,
                tasks: tasks.clone(),
            });
        }
    }
}

/// Per-capability people budget: uniform in `1..=floor(40 / capabilities)`,
/// clamped to at least 1
fn people_budget(capabilities_in_project: usize, rng: &mut impl Rng) -> usize {
    let max_per_capability = (MAX_PEOPLE_PER_PROJECT / capabilities_in_project.max(1)).max(1);
    rng.random_range(1..=max_per_capability)
}

/// Split a people budget into business and IT head counts. The business
/// fraction is uniform in [0.30, 0.50) with at least one business slot.
fn split_budget(budget: usize, rng: &mut impl Rng) -> (usize, usize) {
    let fraction = rng.random_range(BUSINESS_RATIO_MIN..BUSINESS_RATIO_MAX);
    let business = ((budget as f64 * fraction).floor() as usize).max(1);
    (business, budget - business)
}

/// Spread `count` slots over a function list: one slot per function in
/// list order while any remain, leftovers uniform at random
fn distribute_functions(
    count: usize,
    functions: &'static [&'static str],
    rng: &mut impl Rng,
) -> Vec<(&'static str, usize)> {
    let mut counts = vec![0usize; functions.len()];
    let mut remaining = count;

    for slot in counts.iter_mut() {
        if remaining == 0 {
            break;
        }
        *slot = 1;
        remaining -= 1;
    }
    while remaining > 0 {
        counts[rng.random_range(0..functions.len())] += 1;
        remaining -= 1;
    }

    functions.iter().copied().zip(counts).collect()
}

/// Classify a job function as a business or IT resource
fn resource_type_of(function: &str) -> CapabilityDomain {
    if BUSINESS_FUNCTIONS.contains(&function) {
        CapabilityDomain::Business
    } else {
        CapabilityDomain::It
    }
}
