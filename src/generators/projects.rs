//! Program/project generator
//!
//! Emits one flattened row per (project, capability) pair for a program.
//! Capability names are unique within a project on a best-effort basis: a
//! colliding draw is retried up to [`DEDUP_RETRY_BUDGET`] times, then the
//! slot is silently dropped, so a project may carry fewer capability rows
//! than its drawn capability count.

use std::collections::HashSet;

use chrono::Datelike;
use rand::Rng;

use crate::catalog;
use crate::core::{Action, CapabilityDomain, Phase};
use crate::entities::ProjectRow;
use crate::generators::pick;

/// Retry budget for duplicate capability draws within one project
pub const DEDUP_RETRY_BUDGET: u32 = 20;

/// Probability that a project of this program is business-leaning
pub fn business_probability(program: &str) -> f64 {
    if program == "Data Program" {
        0.7
    } else {
        0.6
    }
}

/// Decide the project leaning from a unit-interval draw
pub fn is_business_leaning(program: &str, draw: f64) -> bool {
    draw < business_probability(program)
}

/// Generate all capability assignment rows for one program
pub fn generate_program(program: &str, rng: &mut impl Rng) -> Vec<ProjectRow> {
    let project_count = rng.random_range(10..=20);
    let mut rows = Vec::new();

    for index in 1..=project_count {
        let leaning = is_business_leaning(program, rng.random::<f64>());
        let capability_count = rng.random_range(1..=15);

        let project_name = synthesize_project_name(program, index, rng);
        let phase = if rng.random_bool(0.5) {
            Phase::Initiation
        } else {
            Phase::Intake
        };
        let delivery_period = delivery_period(rng);
        let architect = *pick(rng, catalog::ARCHITECTS);
        let total_cost_estimation = if rng.random_bool(0.7) {
            Some(format_cost(rng.random_range(100_000..10_000_000)))
        } else {
            None
        };

        let mut used: HashSet<&'static str> = HashSet::new();
        for _ in 0..capability_count {
            let business_slot = rng.random_bool(if leaning { 0.8 } else { 0.2 });
            let (pool, domain) = if business_slot {
                (catalog::BUSINESS_CAPABILITIES, CapabilityDomain::Business)
            } else {
                (catalog::IT_CAPABILITIES, CapabilityDomain::It)
            };

            let mut capability = *pick(rng, pool);
            let mut attempts = 1;
            while used.contains(capability) && attempts < DEDUP_RETRY_BUDGET {
                capability = *pick(rng, pool);
                attempts += 1;
            }
            if used.contains(capability) {
                // Retry budget exhausted: drop the slot.
                continue;
            }
            used.insert(capability);

            let action = *pick(rng, &Action::ALL);
            rows.push(ProjectRow {
                program_name: program.to_string(),
                project_name: project_name.clone(),
                phase,
                delivery_period: delivery_period.clone(),
                architect: architect.to_string(),
                total_cost_estimation: total_cost_estimation.clone(),
                capability_domain: domain.to_string(),
                capability_name: capability.to_string(),
                action: action.to_string(),
            });
        }
    }

    rows
}

/// `{term} {component} {action} v{index}`, term from the program's tech
/// vocabulary or the program's first word
fn synthesize_project_name(program: &str, index: u32, rng: &mut impl Rng) -> String {
    let terms = catalog::tech_terms(program);
    let term = if terms.is_empty() {
        program.split(' ').next().unwrap_or(program)
    } else {
        *pick(rng, terms)
    };
    let component = *pick(rng, catalog::PROJECT_COMPONENTS);
    let action = *pick(rng, catalog::PROJECT_ACTIONS);
    format!("{term} {component} {action} v{index}")
}

/// `{year}-Q{quarter}` with the year drawn from this year or next
fn delivery_period(rng: &mut impl Rng) -> String {
    let base_year = chrono::Utc::now().year();
    let year = base_year + i32::from(rng.random_bool(0.5));
    let quarter = rng.random_range(1..=4);
    format!("{year}-Q{quarter}")
}

/// Euro amount with `.`-separated thousands groups, e.g. `€1.250.000`
fn format_cost(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("€{grouped}")
}
