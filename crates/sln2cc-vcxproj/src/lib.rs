//! MSBuild `.vcxproj` loading for sln2cc.
//!
//! Implements the `sln2cc-solution` collaborator traits:
//! [`VcxProject`] loads project files and answers source/configuration
//! queries, [`MsvcSanitizer`] strips MSBuild-only entries out of
//! include/define lists before they reach a command line.

mod error;
mod project;
mod sanitize;

pub use error::{Result, VcxprojError};
pub use project::VcxProject;
pub use sanitize::MsvcSanitizer;
