//! Output directory layout and file naming
//!
//! All generated files live under a single root data directory:
//!
//! ```text
//! <root>/programs/<Program_Name>.csv
//! <root>/resources/project-<name>-human-resource-allocations.csv
//! <root>/teams/team-members.csv
//! <root>/teams-to-capabilities.csv
//! ```

use std::path::{Path, PathBuf};

/// Resolves paths for generated spreadsheet files under a root data directory
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one projects file per program
    pub fn programs_dir(&self) -> PathBuf {
        self.root.join("programs")
    }

    /// Directory holding one allocation file per project
    pub fn resources_dir(&self) -> PathBuf {
        self.root.join("resources")
    }

    /// Directory holding the team roster file
    pub fn teams_dir(&self) -> PathBuf {
        self.root.join("teams")
    }

    /// Projects file for a program, spaces replaced with underscores
    pub fn program_file(&self, program: &str) -> PathBuf {
        self.programs_dir()
            .join(format!("{}.csv", program.replace(' ', "_")))
    }

    /// Allocation file for a project, name sanitized for the filesystem
    pub fn allocation_file(&self, project_name: &str) -> PathBuf {
        self.resources_dir().join(format!(
            "project-{}-human-resource-allocations.csv",
            sanitize_project_name(project_name)
        ))
    }

    /// The team members roster file
    pub fn team_members_file(&self) -> PathBuf {
        self.teams_dir().join("team-members.csv")
    }

    /// The team-to-capability mapping file
    pub fn team_capabilities_file(&self) -> PathBuf {
        self.root.join("teams-to-capabilities.csv")
    }

    /// All program spreadsheet files currently on disk, sorted by path.
    /// Missing or unreadable directories yield an empty list; the caller
    /// decides whether that is fatal.
    pub fn program_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(self.programs_dir())
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
            })
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();
        files
    }
}

/// Sanitize a project name for use in a file name: every run of
/// non-alphanumeric characters becomes a single hyphen, lowercased.
pub fn sanitize_project_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::CsvStore;
    use tempfile::tempdir;

    #[test]
    fn test_sanitize_project_name() {
        assert_eq!(
            sanitize_project_name("API Platform Migration v3"),
            "api-platform-migration-v3"
        );
    }

    #[test]
    fn test_sanitize_collapses_runs() {
        assert_eq!(
            sanitize_project_name("AI/ML System Upgrade v12"),
            "ai-ml-system-upgrade-v12"
        );
        assert_eq!(sanitize_project_name("a  (b)"), "a-b-");
    }

    #[test]
    fn test_program_file_replaces_spaces() {
        let layout = DataLayout::new("/data");
        assert_eq!(
            layout.program_file("IT Core Program"),
            PathBuf::from("/data/programs/IT_Core_Program.csv")
        );
    }

    #[test]
    fn test_allocation_file_path() {
        let layout = DataLayout::new("/data");
        let path = layout.allocation_file("Mobile System Upgrade v2");
        assert_eq!(
            path,
            PathBuf::from(
                "/data/resources/project-mobile-system-upgrade-v2-human-resource-allocations.csv"
            )
        );
    }

    #[test]
    fn test_program_files_lists_only_csv() {
        let tmp = tempdir().unwrap();
        let layout = DataLayout::new(tmp.path());
        std::fs::create_dir_all(layout.programs_dir()).unwrap();

        #[derive(serde::Serialize)]
        struct Row {
            #[serde(rename = "A")]
            a: u32,
        }
        CsvStore::write(&layout.program_file("Credit Program"), &[Row { a: 1 }]).unwrap();
        std::fs::write(layout.programs_dir().join("notes.txt"), "ignore me").unwrap();

        let files = layout.program_files();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("Credit_Program.csv"));
    }

    #[test]
    fn test_program_files_empty_when_dir_missing() {
        let tmp = tempdir().unwrap();
        let layout = DataLayout::new(tmp.path().join("never-created"));
        assert!(layout.program_files().is_empty());
    }
}
