//! `pforge resources` command - generate resource allocations
//!
//! Reads every projects file written by `pforge programs` and writes one
//! allocation file per distinct project. Missing input is the one fatal
//! condition of the whole tool.

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::{CapabilityDomain, CsvStore, DataLayout};
use crate::entities::ProjectRow;
use crate::generators::resources;

pub fn run(global: &GlobalOpts) -> Result<()> {
    let layout = DataLayout::new(&global.data_dir);

    let program_files = layout.program_files();
    if program_files.is_empty() {
        return Err(miette::miette!(
            "no program files found in {}. Run 'pforge programs' first.",
            layout.programs_dir().display()
        ));
    }

    if !global.quiet {
        println!(
            "Found {} program files to process",
            style(program_files.len()).bold()
        );
    }

    let mut assignments: Vec<ProjectRow> = Vec::new();
    for file in &program_files {
        let rows: Vec<ProjectRow> = CsvStore::read(file).into_diagnostic()?;
        if !global.quiet {
            println!(
                "{} Read {} rows from {}",
                style("✓").green(),
                rows.len(),
                style(file.display()).cyan()
            );
        }
        assignments.extend(rows);
    }

    std::fs::create_dir_all(layout.resources_dir()).into_diagnostic()?;

    let mut rng = global.rng();
    let allocations = resources::allocate(&assignments, &mut rng);

    let mut total_rows = 0usize;
    let mut business_rows = 0usize;
    for project in &allocations {
        let path = layout.allocation_file(&project.project_name);
        CsvStore::write(&path, &project.rows).into_diagnostic()?;

        if !global.quiet {
            println!(
                "{} {} - {} allocations -> {}",
                style("✓").green(),
                style(&project.project_name).bold(),
                project.rows.len(),
                style(path.display()).cyan()
            );
        }
        total_rows += project.rows.len();
        business_rows += project
            .rows
            .iter()
            .filter(|r| r.resource_type == CapabilityDomain::Business)
            .count();
    }

    if !global.quiet {
        let business_pct = if total_rows > 0 {
            business_rows as f64 / total_rows as f64 * 100.0
        } else {
            0.0
        };
        println!();
        println!(
            "Generated {} allocations across {} projects ({:.1}% business, {:.1}% IT)",
            style(total_rows).bold(),
            allocations.len(),
            business_pct,
            100.0 - business_pct
        );
    }
    Ok(())
}
