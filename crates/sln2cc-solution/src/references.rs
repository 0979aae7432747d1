//! Project reference extraction from solution text.
//!
//! Reference lines look like:
//!
//! ```text
//! Project("{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}") = "app", "lib\app.vcxproj", "{ABCD-1234}"
//! ```
//!
//! Only `.vcxproj` references are kept; solution folders and other
//! project kinds are skipped silently.

use crate::error::{Result, SolutionError};
use indexmap::IndexMap;

const LINE_PREFIX: &str = "Project(";
const PROJECT_EXTENSION: &str = ".vcxproj";

/// Parse all supported project references out of the solution text.
///
/// Returns a normalized-path -> GUID table in first-encountered order.
/// A duplicate path keeps its original position but takes the later
/// GUID. Fails only if no supported reference is found at all.
pub(crate) fn parse_project_references(content: &str) -> Result<IndexMap<String, String>> {
    let mut references = IndexMap::new();

    for line in content.lines() {
        if let Some((path, guid)) = parse_reference_line(line) {
            if path.ends_with(PROJECT_EXTENSION) {
                references.insert(path.replace('\\', "/"), guid.to_string());
            }
        }
    }

    if references.is_empty() {
        return Err(SolutionError::NoProjects);
    }

    Ok(references)
}

/// Parse one `Project("{kind}") = "name", "path", "{guid}"` line.
///
/// The kind identifier is not inspected. Returns `None` for any line
/// that does not have the expected shape; malformed lines are tolerated.
fn parse_reference_line(line: &str) -> Option<(String, &str)> {
    let rest = line.trim_start().strip_prefix(LINE_PREFIX)?;

    let (_kind, rest) = take_quoted(rest)?;
    let rest = rest.trim_start().strip_prefix(')')?;
    let rest = rest.trim_start().strip_prefix('=')?;

    let (_name, rest) = take_quoted(rest)?;
    let rest = rest.trim_start().strip_prefix(',')?;
    let (path, rest) = take_quoted(rest)?;
    let rest = rest.trim_start().strip_prefix(',')?;
    let (guid, _) = take_quoted(rest)?;

    let guid = guid.strip_prefix('{')?.strip_suffix('}')?;
    Some((path.to_string(), guid))
}

/// Take the next double-quoted field, returning it and the remainder
/// after the closing quote.
fn take_quoted(input: &str) -> Option<(&str, &str)> {
    let rest = input.trim_start().strip_prefix('"')?;
    let end = rest.find('"')?;
    Some((&rest[..end], &rest[end + 1..]))
}
