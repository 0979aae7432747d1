//! Error types for sln2cc-vcxproj.

use thiserror::Error;

/// Result type for project-file operations.
pub type Result<T> = std::result::Result<T, VcxprojError>;

/// Errors that can occur while loading a `.vcxproj` file.
#[derive(Error, Debug)]
pub enum VcxprojError {
    /// Failed to read the project file.
    #[error("Failed to read project file: {0}")]
    Read(#[from] std::io::Error),

    /// Failed to deserialize the project XML.
    #[error("Failed to parse project XML: {0}")]
    ParseXml(#[from] quick_xml::DeError),

    /// The project defines no settings for the requested configuration.
    #[error("Configuration not found in project: {0}")]
    ConfigurationNotFound(String),
}
