//! Collaborator interfaces the solution model is built against.
//!
//! The model does not parse project files itself; a loader hands it
//! objects implementing [`Project`], one per reference in the solution.

use std::path::{Path, PathBuf};

/// Boxed error crossing the collaborator seam.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Include directories and preprocessor defines for one configuration.
///
/// Entries are kept in project-file order and may still contain raw
/// MSBuild tokens (`$(SolutionDir)`, `%(...)` item macros); substitution
/// and sanitization happen during command generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerSettings {
    pub include_paths: Vec<String>,
    pub defines: Vec<String>,
}

/// A loaded project document.
pub trait Project {
    /// Directory containing the project file.
    fn directory(&self) -> &Path;

    /// Absolute path of the project file, as it was loaded.
    fn absolute_path(&self) -> &Path;

    /// Source files the project compiles, in document order.
    fn source_files(&self) -> &[PathBuf];

    /// Look up the compiler settings for a configuration name
    /// (e.g. `"Debug|x64"`). Fails if the project has no such
    /// configuration.
    fn configuration(&self, name: &str) -> Result<CompilerSettings, BoxError>;
}

/// Strips invalid entries out of semicolon-joined include/define lists.
///
/// What counts as invalid is the implementor's policy; the generator
/// only promises to call these after variable substitution.
pub trait Sanitizer {
    fn sanitize_includes(&self, raw: &str) -> String;
    fn sanitize_defines(&self, raw: &str) -> String;
}
