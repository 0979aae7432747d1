//! The solution model: parsed references, configuration mappings, and
//! the projects loaded through them.

use crate::error::{Result, SolutionError};
use crate::mappings::ConfigMappings;
use crate::project::{BoxError, Project};
use crate::references::parse_project_references;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// A resolved solution: immutable once constructed.
///
/// `P` is the loaded project type; the model itself never parses project
/// files and only talks to projects through the [`Project`] trait.
pub struct Solution<P> {
    dir: PathBuf,
    references: IndexMap<String, String>,
    mappings: ConfigMappings,
    projects: Vec<P>,
}

impl<P: Project> Solution<P> {
    /// Load a solution from disk.
    ///
    /// The file is read whole before parsing. `load_project` is called
    /// once per supported reference, in document order, with the
    /// absolute project path; any failure aborts construction.
    pub fn load<F>(path: impl AsRef<Path>, load_project: F) -> Result<Self>
    where
        F: FnMut(&Path) -> std::result::Result<P, BoxError>,
    {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let dir = solution_dir(path)?;
        Self::from_str(&content, dir, load_project)
    }

    /// Build a solution model from document text and its base directory.
    pub fn from_str<F>(
        content: &str,
        dir: impl Into<PathBuf>,
        mut load_project: F,
    ) -> Result<Self>
    where
        F: FnMut(&Path) -> std::result::Result<P, BoxError>,
    {
        let dir = dir.into();
        let references = parse_project_references(content)?;
        let mappings = ConfigMappings::parse(content)?;

        let mut projects = Vec::with_capacity(references.len());
        for reference in references.keys() {
            let project_path = dir.join(reference);
            let project =
                load_project(&project_path).map_err(|source| SolutionError::ProjectLoad {
                    path: project_path,
                    source,
                })?;
            projects.push(project);
        }

        Ok(Self {
            dir,
            references,
            mappings,
            projects,
        })
    }

    /// Absolute directory containing the solution file.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loaded projects, in reference order.
    pub fn projects(&self) -> &[P] {
        &self.projects
    }

    /// Normalized-path -> GUID reference table, in reference order.
    pub fn references(&self) -> &IndexMap<String, String> {
        &self.references
    }

    pub fn mappings(&self) -> &ConfigMappings {
        &self.mappings
    }

    /// Resolve the project configuration to build for `solution_config`,
    /// keyed by the project's registered (normalized, relative) path.
    ///
    /// An unregistered path is an error. A registered path with no
    /// mapping row falls back to the solution configuration itself: a
    /// project without explicit mappings builds under the same-named
    /// configuration.
    pub fn resolve_config(&self, project_path: &str, solution_config: &str) -> Result<String> {
        let guid = self
            .references
            .get(project_path)
            .ok_or_else(|| SolutionError::ProjectNotFound(project_path.to_string()))?;

        Ok(self
            .mappings
            .lookup(guid, solution_config)
            .unwrap_or(solution_config)
            .to_string())
    }

    /// Resolve the configuration for a loaded project object.
    ///
    /// The project is matched back to its registered path by absolute
    /// path, first registration wins. A project that matches no
    /// reference resolves to the identity fallback silently; this query
    /// never fails.
    pub fn resolve_config_for_project(&self, project: &P, solution_config: &str) -> String {
        for (path, guid) in &self.references {
            if self.dir.join(path) == project.absolute_path() {
                return self
                    .mappings
                    .lookup(guid, solution_config)
                    .unwrap_or(solution_config)
                    .to_string();
            }
        }
        solution_config.to_string()
    }
}

/// Absolute directory containing the solution file.
fn solution_dir(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(absolute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{CompilerSettings, Project};

    struct StubProject {
        path: PathBuf,
    }

    impl Project for StubProject {
        fn directory(&self) -> &Path {
            self.path.parent().unwrap()
        }

        fn absolute_path(&self) -> &Path {
            &self.path
        }

        fn source_files(&self) -> &[PathBuf] {
            &[]
        }

        fn configuration(&self, _name: &str) -> std::result::Result<CompilerSettings, BoxError> {
            Ok(CompilerSettings::default())
        }
    }

    const SOLUTION: &str = r#"
Project("{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}") = "app", "lib\app.vcxproj", "{AAAA}"
EndProject
Project("{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}") = "core", "core\core.vcxproj", "{BBBB}"
EndProject
Global
	GlobalSection(ProjectConfigurationPlatforms) = postSolution
		{AAAA}.Debug|x64.ActiveCfg = Debug|Win32
		{AAAA}.Debug|x64.Build.0 = Debug|Win32
	EndGlobalSection
EndGlobal
"#;

    fn stub_solution() -> Solution<StubProject> {
        Solution::from_str(SOLUTION, "/sln", |path| {
            Ok(StubProject {
                path: path.to_path_buf(),
            })
        })
        .unwrap()
    }

    #[test]
    fn test_loads_one_project_per_reference_in_order() {
        let solution = stub_solution();

        let paths: Vec<&Path> = solution
            .projects()
            .iter()
            .map(|p| p.absolute_path())
            .collect();
        assert_eq!(
            paths,
            vec![
                Path::new("/sln/lib/app.vcxproj"),
                Path::new("/sln/core/core.vcxproj")
            ]
        );
    }

    #[test]
    fn test_project_load_failure_aborts_construction() {
        let result: Result<Solution<StubProject>> =
            Solution::from_str(SOLUTION, "/sln", |_| Err("missing file".into()));

        assert!(matches!(result, Err(SolutionError::ProjectLoad { .. })));
    }

    #[test]
    fn test_resolve_config_uses_mapping_row() {
        let solution = stub_solution();

        let config = solution.resolve_config("lib/app.vcxproj", "Debug|x64").unwrap();
        assert_eq!(config, "Debug|Win32");
    }

    #[test]
    fn test_resolve_config_identity_fallback_without_row() {
        let solution = stub_solution();

        let config = solution
            .resolve_config("core/core.vcxproj", "Release|x64")
            .unwrap();
        assert_eq!(config, "Release|x64");
    }

    #[test]
    fn test_resolve_config_unregistered_path_is_an_error() {
        let solution = stub_solution();

        assert!(matches!(
            solution.resolve_config("other/other.vcxproj", "Debug|x64"),
            Err(SolutionError::ProjectNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_config_for_project_matches_by_absolute_path() {
        let solution = stub_solution();

        let config = solution.resolve_config_for_project(&solution.projects()[0], "Debug|x64");
        assert_eq!(config, "Debug|Win32");
    }

    #[test]
    fn test_resolve_config_for_unknown_project_falls_back_silently() {
        let solution = stub_solution();
        let stray = StubProject {
            path: PathBuf::from("/elsewhere/stray.vcxproj"),
        };

        assert_eq!(
            solution.resolve_config_for_project(&stray, "Debug|x64"),
            "Debug|x64"
        );
    }
}
