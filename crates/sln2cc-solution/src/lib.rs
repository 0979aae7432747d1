//! Visual Studio solution parsing and compile command generation.
//!
//! This crate turns a `.sln` file into a compilation database:
//!
//! 1. Extract `.vcxproj` references and the solution's
//!    configuration-mapping section into a typed model ([`Solution`]).
//! 2. Resolve, for a requested solution configuration, the configuration
//!    each project actually builds with (explicit mapping rows, identity
//!    fallback otherwise).
//! 3. Emit one [`CompileCommand`] per source file via
//!    [`compile_commands`].
//!
//! Project files themselves are loaded through the [`Project`] trait;
//! see the `sln2cc-vcxproj` crate for the MSBuild implementation.

mod error;
mod generate;
mod mappings;
mod project;
mod references;
mod solution;

pub use error::{Result, SolutionError};
pub use generate::{compile_commands, CompileCommand, COMPILER};
pub use mappings::ConfigMappings;
pub use project::{BoxError, CompilerSettings, Project, Sanitizer};
pub use solution::Solution;
