//! Configuration mapping extraction.
//!
//! Solutions map each (project, solution configuration) pair to a
//! project configuration inside the `ProjectConfigurationPlatforms`
//! global section:
//!
//! ```text
//! GlobalSection(ProjectConfigurationPlatforms) = postSolution
//!     {ABCD-1234}.Debug|x64.ActiveCfg = Debug|Win32
//!     {ABCD-1234}.Debug|x64.Build.0 = Debug|Win32
//! EndGlobalSection
//! ```
//!
//! `ActiveCfg` rows pick the configuration name, `Build.0` rows mark the
//! project as built for that solution configuration. Both collapse into
//! a single row per key.

use crate::error::{Result, SolutionError};
use indexmap::map::Entry;
use indexmap::IndexMap;

const SECTION_START: &str = "GlobalSection(ProjectConfigurationPlatforms)";
const SECTION_END: &str = "EndGlobalSection";
const ACTIVE_CFG_SUFFIX: &str = ".ActiveCfg";
const BUILD_SUFFIX: &str = ".Build.0";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MappingKey {
    guid: String,
    solution_config: String,
}

#[derive(Debug, Clone, Default)]
struct MappingRow {
    project_config: String,
    should_build: bool,
}

/// Deduplicated configuration mapping table, in first-appearance order.
#[derive(Debug, Default)]
pub struct ConfigMappings {
    rows: IndexMap<MappingKey, MappingRow>,
}

impl ConfigMappings {
    /// Extract the mapping table from solution text.
    ///
    /// Rows are only recognized between the section start marker and its
    /// `EndGlobalSection`; a solution without the section yields an empty
    /// table. A section that is opened but never closed is malformed.
    pub fn parse(content: &str) -> Result<Self> {
        let mut mappings = Self::default();
        let mut in_section = false;
        let mut closed = false;

        for line in content.lines() {
            let line = line.trim();
            if !in_section {
                if line.starts_with(SECTION_START) {
                    in_section = true;
                }
                continue;
            }
            if line.starts_with(SECTION_END) {
                closed = true;
                break;
            }
            if let Some((guid, solution_config, project_config, should_build)) =
                parse_mapping_line(line)
            {
                mappings.insert(guid, solution_config, project_config, should_build);
            }
        }

        if in_section && !closed {
            return Err(SolutionError::UnterminatedConfigSection);
        }

        Ok(mappings)
    }

    /// The project configuration mapped to `(guid, solution_config)`,
    /// if a row exists.
    pub fn lookup(&self, guid: &str, solution_config: &str) -> Option<&str> {
        self.rows
            .get(&MappingKey {
                guid: guid.to_string(),
                solution_config: solution_config.to_string(),
            })
            .map(|row| row.project_config.as_str())
    }

    /// Whether the project participates in the build for this solution
    /// configuration. Absent rows mean no.
    pub fn should_build(&self, guid: &str, solution_config: &str) -> bool {
        self.rows
            .get(&MappingKey {
                guid: guid.to_string(),
                solution_config: solution_config.to_string(),
            })
            .is_some_and(|row| row.should_build)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Merge-on-insert: `should_build` ORs in, the configuration name is
    /// taken from the first row that carried a non-empty one.
    fn insert(&mut self, guid: &str, solution_config: &str, project_config: &str, should_build: bool) {
        let key = MappingKey {
            guid: guid.to_string(),
            solution_config: solution_config.to_string(),
        };
        match self.rows.entry(key) {
            Entry::Occupied(mut entry) => {
                let row = entry.get_mut();
                row.should_build |= should_build;
                if row.project_config.is_empty() {
                    row.project_config = project_config.to_string();
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(MappingRow {
                    project_config: project_config.to_string(),
                    should_build,
                });
            }
        }
    }
}

/// Parse one `{guid}.<solution-config>.<suffix> = <project-config>` row.
///
/// Returns `None` for rows with any other shape or suffix (e.g.
/// `Deploy.0`), which are ignored.
fn parse_mapping_line(line: &str) -> Option<(&str, &str, &str, bool)> {
    let (key, value) = line.split_once('=')?;
    let rest = key.trim().strip_prefix('{')?;
    let (guid, rest) = rest.split_once('}')?;
    let rest = rest.strip_prefix('.')?;

    let (solution_config, should_build) = if let Some(cfg) = rest.strip_suffix(ACTIVE_CFG_SUFFIX) {
        (cfg, false)
    } else if let Some(cfg) = rest.strip_suffix(BUILD_SUFFIX) {
        (cfg, true)
    } else {
        return None;
    };

    Some((guid, solution_config, value.trim(), should_build))
}
