//! Error types for sln2cc-solution.

use crate::project::BoxError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for solution operations.
pub type Result<T> = std::result::Result<T, SolutionError>;

/// Errors that can occur while building or querying a solution model.
#[derive(Error, Debug)]
pub enum SolutionError {
    /// Failed to read the solution file.
    #[error("Failed to read solution file: {0}")]
    Read(#[from] std::io::Error),

    /// The solution file contains no supported project references.
    #[error("No project references found in solution")]
    NoProjects,

    /// The project configuration section was opened but never closed.
    #[error("Project configuration section is missing EndGlobalSection")]
    UnterminatedConfigSection,

    /// A configuration query targeted a path that is not registered.
    #[error("Project not found in solution: {0}")]
    ProjectNotFound(String),

    /// A referenced project failed to load.
    #[error("Failed to load project {path}: {source}")]
    ProjectLoad {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// A project could not supply data for its resolved configuration.
    #[error("Project {project} has no data for configuration {config}: {source}")]
    ConfigData {
        project: PathBuf,
        config: String,
        #[source]
        source: BoxError,
    },
}
