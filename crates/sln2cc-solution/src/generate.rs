//! Compile command generation.
//!
//! Produces one entry per (project, source file) pair, in model order,
//! matching the compile_commands.json schema.

use crate::error::{Result, SolutionError};
use crate::project::{Project, Sanitizer};
use crate::solution::Solution;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Compiler invoked by every generated command.
pub const COMPILER: &str = "clang-cl.exe";

const SOLUTION_DIR_VAR: &str = "$(SolutionDir)";
const DEFINE_FLAG: &str = "-D";
const INCLUDE_FLAG: &str = "-I";
const COMPILE_ONLY_FLAG: &str = "-c";

/// A single compile_commands.json entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileCommand {
    /// The working directory for compilation.
    pub directory: PathBuf,

    /// The source file path.
    pub file: PathBuf,

    /// The full compilation command (space-separated).
    pub command: String,
}

/// Generate the compilation database for one solution configuration.
///
/// Each project's effective configuration comes from
/// [`Solution::resolve_config_for_project`]; a project the solution does
/// not map simply builds under `solution_config` itself. A project that
/// cannot supply include/define data for its resolved configuration
/// aborts the whole run: that configuration does not exist in the
/// project's own data.
pub fn compile_commands<P: Project>(
    solution: &Solution<P>,
    solution_config: &str,
    sanitizer: &dyn Sanitizer,
) -> Result<Vec<CompileCommand>> {
    let solution_dir = solution.dir().to_string_lossy().into_owned();
    let mut commands = Vec::new();

    for project in solution.projects() {
        let config = solution.resolve_config_for_project(project, solution_config);

        for file in project.source_files() {
            let settings =
                project
                    .configuration(&config)
                    .map_err(|source| SolutionError::ConfigData {
                        project: project.absolute_path().to_path_buf(),
                        config: config.clone(),
                        source,
                    })?;

            // Substitution runs before sanitization so that entries with
            // still-unresolved variables can be dropped as invalid.
            let includes: Vec<String> = settings
                .include_paths
                .iter()
                .map(|entry| entry.replace(SOLUTION_DIR_VAR, &solution_dir))
                .collect();

            let defines = sanitizer.sanitize_defines(&settings.defines.join(";"));
            let includes = sanitizer.sanitize_includes(&includes.join(";"));

            let mut segments = vec![COMPILER.to_string()];
            segments.extend(split_list(&defines).map(|d| format!("{DEFINE_FLAG}{d}")));
            segments.extend(split_list(&includes).map(|i| format!("{INCLUDE_FLAG}{i}")));
            segments.push(COMPILE_ONLY_FLAG.to_string());
            segments.push(file.to_string_lossy().into_owned());

            commands.push(CompileCommand {
                directory: project.directory().to_path_buf(),
                file: file.clone(),
                command: segments.join(" "),
            });
        }
    }

    Ok(commands)
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';').filter(|entry| !entry.is_empty())
}
