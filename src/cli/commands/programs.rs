//! `pforge programs` command - generate projects per program

use console::style;
use miette::{IntoDiagnostic, Result};
use std::collections::HashSet;

use crate::catalog;
use crate::cli::GlobalOpts;
use crate::core::{CsvStore, DataLayout};
use crate::generators::projects;

pub fn run(global: &GlobalOpts) -> Result<()> {
    let layout = DataLayout::new(&global.data_dir);
    std::fs::create_dir_all(layout.programs_dir()).into_diagnostic()?;

    let mut rng = global.rng();
    let mut total_projects = 0usize;
    let mut total_rows = 0usize;

    for program in catalog::PROGRAMS {
        let rows = projects::generate_program(program, &mut rng);
        let project_count = rows
            .iter()
            .map(|r| r.project_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        let path = layout.program_file(program);
        CsvStore::write(&path, &rows).into_diagnostic()?;

        if !global.quiet {
            println!(
                "{} {} - {} projects, {} capability rows -> {}",
                style("✓").green(),
                style(program).bold(),
                project_count,
                rows.len(),
                style(path.display()).cyan()
            );
        }
        total_projects += project_count;
        total_rows += rows.len();
    }

    if !global.quiet {
        println!();
        println!(
            "Generated {} projects ({} capability rows) across {} programs",
            style(total_projects).bold(),
            total_rows,
            catalog::PROGRAMS.len()
        );
    }
    Ok(())
}
