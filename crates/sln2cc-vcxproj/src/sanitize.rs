//! Include/define list cleanup.
//!
//! MSBuild lists carry trailing item macros
//! (`%(AdditionalIncludeDirectories)`, `%(PreprocessorDefinitions)`) and
//! may keep property references the substitution pass did not resolve.
//! Neither belongs on a clang-cl command line.

use sln2cc_solution::Sanitizer;

/// Drops MSBuild-only entries from semicolon-joined lists.
pub struct MsvcSanitizer;

impl Sanitizer for MsvcSanitizer {
    fn sanitize_includes(&self, raw: &str) -> String {
        clean(raw)
    }

    fn sanitize_defines(&self, raw: &str) -> String {
        clean(raw)
    }
}

fn clean(raw: &str) -> String {
    raw.split(';')
        .filter(|entry| is_valid(entry))
        .collect::<Vec<_>>()
        .join(";")
}

/// An entry is invalid if it is empty, is an item macro, or still
/// contains an unexpanded property reference.
fn is_valid(entry: &str) -> bool {
    !entry.is_empty() && !entry.contains("%(") && !entry.contains("$(")
}
