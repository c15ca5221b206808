//! `pforge mappings` command - generate team-to-capability mappings

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::catalog;
use crate::cli::GlobalOpts;
use crate::core::{CsvStore, DataLayout};
use crate::generators::team_capabilities;

pub fn run(global: &GlobalOpts) -> Result<()> {
    let layout = DataLayout::new(&global.data_dir);
    std::fs::create_dir_all(layout.root()).into_diagnostic()?;

    let mut rng = global.rng();
    let rows = team_capabilities::generate(&mut rng);

    let path = layout.team_capabilities_file();
    CsvStore::write(&path, &rows).into_diagnostic()?;

    if !global.quiet {
        let served: std::collections::HashSet<&str> =
            rows.iter().map(|r| r.team_name.as_str()).collect();
        println!(
            "{} Mapped {} capabilities to {} of {} teams -> {}",
            style("✓").green(),
            style(rows.len()).bold(),
            served.len(),
            catalog::MAPPING_TEAMS.len(),
            style(path.display()).cyan()
        );
    }
    Ok(())
}
