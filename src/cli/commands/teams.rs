//! `pforge teams` command - generate the team members roster

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::catalog;
use crate::cli::GlobalOpts;
use crate::core::{CsvStore, DataLayout};
use crate::generators::team_members;

pub fn run(global: &GlobalOpts) -> Result<()> {
    let layout = DataLayout::new(&global.data_dir);
    std::fs::create_dir_all(layout.teams_dir()).into_diagnostic()?;

    let mut rng = global.rng();
    let rows = team_members::generate(&mut rng);

    let path = layout.team_members_file();
    CsvStore::write(&path, &rows).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Generated {} members across {} teams -> {}",
            style("✓").green(),
            style(rows.len()).bold(),
            catalog::ROSTER_TEAMS.len(),
            style(path.display()).cyan()
        );
    }
    Ok(())
}
