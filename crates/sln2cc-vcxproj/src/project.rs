//! MSBuild `.vcxproj` loading.
//!
//! Only the parts of the MSBuild schema this tool consumes are modeled:
//! `ItemGroup/ClCompile` items for source enumeration and
//! `ItemDefinitionGroup` blocks for per-configuration include/define
//! lists. Everything else in the document is ignored.

use crate::error::{Result, VcxprojError};
use indexmap::IndexMap;
use serde::Deserialize;
use sln2cc_solution::{BoxError, CompilerSettings, Project};
use std::path::{Path, PathBuf};

/// `.vcxproj` project structure, reduced to the consumed elements.
#[derive(Debug, Deserialize)]
struct ProjectXml {
    #[serde(rename = "ItemGroup", default)]
    item_groups: Vec<ItemGroup>,

    #[serde(rename = "ItemDefinitionGroup", default)]
    item_definition_groups: Vec<ItemDefinitionGroup>,
}

#[derive(Debug, Deserialize)]
struct ItemGroup {
    #[serde(rename = "ClCompile", default)]
    cl_compile: Vec<ClCompileItem>,
}

/// A `<ClCompile Include="..."/>` source item.
#[derive(Debug, Deserialize)]
struct ClCompileItem {
    #[serde(rename = "@Include", default)]
    include: Option<String>,
}

/// Per-configuration compiler settings block.
#[derive(Debug, Deserialize)]
struct ItemDefinitionGroup {
    #[serde(rename = "@Condition", default)]
    condition: Option<String>,

    #[serde(rename = "ClCompile", default)]
    cl_compile: Option<ClCompileSettings>,
}

#[derive(Debug, Deserialize)]
struct ClCompileSettings {
    #[serde(rename = "AdditionalIncludeDirectories", default)]
    additional_include_directories: Option<String>,

    #[serde(rename = "PreprocessorDefinitions", default)]
    preprocessor_definitions: Option<String>,
}

/// A loaded `.vcxproj` file.
#[derive(Debug)]
pub struct VcxProject {
    path: PathBuf,
    dir: PathBuf,
    sources: Vec<PathBuf>,
    configs: IndexMap<String, CompilerSettings>,
}

impl VcxProject {
    /// Load a project from disk. The file is read whole before parsing.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_str(path, &content)
    }

    /// Build a project from document text and the path it came from.
    pub fn from_str(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        let xml: ProjectXml = quick_xml::de::from_str(content)?;

        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let sources = xml
            .item_groups
            .iter()
            .flat_map(|group| &group.cl_compile)
            .filter_map(|item| item.include.as_deref())
            .map(PathBuf::from)
            .collect();

        let mut configs = IndexMap::new();
        for group in &xml.item_definition_groups {
            let Some(name) = group.condition.as_deref().and_then(condition_config) else {
                continue;
            };
            let Some(settings) = &group.cl_compile else {
                continue;
            };
            configs.insert(
                name.to_string(),
                CompilerSettings {
                    include_paths: split_entries(
                        settings.additional_include_directories.as_deref(),
                    ),
                    defines: split_entries(settings.preprocessor_definitions.as_deref()),
                },
            );
        }

        Ok(Self {
            path,
            dir,
            sources,
            configs,
        })
    }

    /// Configuration names the project defines, in document order.
    pub fn configurations(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }
}

impl Project for VcxProject {
    fn directory(&self) -> &Path {
        &self.dir
    }

    fn absolute_path(&self) -> &Path {
        &self.path
    }

    fn source_files(&self) -> &[PathBuf] {
        &self.sources
    }

    fn configuration(&self, name: &str) -> std::result::Result<CompilerSettings, BoxError> {
        self.configs
            .get(name)
            .cloned()
            .ok_or_else(|| VcxprojError::ConfigurationNotFound(name.to_string()).into())
    }
}

/// Extract `Config|Platform` out of a condition like
/// `'$(Configuration)|$(Platform)'=='Debug|x64'`.
fn condition_config(condition: &str) -> Option<&str> {
    let (_, rhs) = condition.split_once("==")?;
    rhs.trim().strip_prefix('\'')?.strip_suffix('\'')
}

/// Split a semicolon-joined MSBuild list, keeping entries verbatim.
/// `%(...)` macros and empty entries survive here; the sanitizer drops
/// them during generation.
fn split_entries(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| raw.split(';').map(str::to_string).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VCXPROJ: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup Label="ProjectConfigurations">
    <ProjectConfiguration Include="Debug|Win32">
      <Configuration>Debug</Configuration>
      <Platform>Win32</Platform>
    </ProjectConfiguration>
  </ItemGroup>
  <PropertyGroup Label="Globals">
    <ProjectGuid>{ABCD-1234}</ProjectGuid>
  </PropertyGroup>
  <ItemDefinitionGroup Condition="'$(Configuration)|$(Platform)'=='Debug|Win32'">
    <ClCompile>
      <AdditionalIncludeDirectories>include;$(SolutionDir)shared;%(AdditionalIncludeDirectories)</AdditionalIncludeDirectories>
      <PreprocessorDefinitions>WIN32;_DEBUG;%(PreprocessorDefinitions)</PreprocessorDefinitions>
    </ClCompile>
  </ItemDefinitionGroup>
  <ItemDefinitionGroup Condition="'$(Configuration)|$(Platform)'=='Release|Win32'">
    <ClCompile>
      <PreprocessorDefinitions>WIN32;NDEBUG</PreprocessorDefinitions>
    </ClCompile>
  </ItemDefinitionGroup>
  <ItemGroup>
    <ClCompile Include="src\main.cpp" />
    <ClCompile Include="src\util.cpp" />
  </ItemGroup>
  <ItemGroup>
    <ClInclude Include="src\util.h" />
  </ItemGroup>
</Project>
"#;

    #[test]
    fn test_enumerates_cl_compile_sources_in_order() {
        let project = VcxProject::from_str("/proj/app.vcxproj", VCXPROJ).unwrap();

        assert_eq!(
            project.source_files(),
            &[PathBuf::from("src\\main.cpp"), PathBuf::from("src\\util.cpp")]
        );
    }

    #[test]
    fn test_directory_is_project_parent() {
        let project = VcxProject::from_str("/proj/app.vcxproj", VCXPROJ).unwrap();

        assert_eq!(project.directory(), Path::new("/proj"));
        assert_eq!(project.absolute_path(), Path::new("/proj/app.vcxproj"));
    }

    #[test]
    fn test_configuration_lookup_splits_lists() {
        let project = VcxProject::from_str("/proj/app.vcxproj", VCXPROJ).unwrap();

        let settings = project.configuration("Debug|Win32").unwrap();
        assert_eq!(
            settings.include_paths,
            vec![
                "include",
                "$(SolutionDir)shared",
                "%(AdditionalIncludeDirectories)"
            ]
        );
        assert_eq!(
            settings.defines,
            vec!["WIN32", "_DEBUG", "%(PreprocessorDefinitions)"]
        );
    }

    #[test]
    fn test_missing_include_list_is_empty() {
        let project = VcxProject::from_str("/proj/app.vcxproj", VCXPROJ).unwrap();

        let settings = project.configuration("Release|Win32").unwrap();
        assert!(settings.include_paths.is_empty());
        assert_eq!(settings.defines, vec!["WIN32", "NDEBUG"]);
    }

    #[test]
    fn test_unknown_configuration_is_an_error() {
        let project = VcxProject::from_str("/proj/app.vcxproj", VCXPROJ).unwrap();

        let err = project.configuration("Debug|x64").unwrap_err();
        assert!(err.to_string().contains("Debug|x64"));
    }

    #[test]
    fn test_condition_config_extraction() {
        assert_eq!(
            condition_config("'$(Configuration)|$(Platform)'=='Debug|x64'"),
            Some("Debug|x64")
        );
        assert_eq!(condition_config("'$(UseDebugLibraries)'"), None);
    }
}
