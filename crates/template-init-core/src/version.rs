//! Version comparison between an existing marker and this template

use semver::Version;

/// Compare the template version recorded in an existing marker against the
/// version this tool initializes. Returns a warning if the directory was
/// initialized by a newer template than the one being applied now.
pub fn check_compatibility(current_version: &str, recorded_version: &str) -> Option<String> {
    let current = parse_version(current_version)?;
    let recorded = parse_version(recorded_version)?;

    if recorded > current {
        Some(format!(
            "This project was initialized from template version {}, \
             but this initializer applies version {}. \
             Re-initializing may undo newer changes.",
            recorded_version, current_version
        ))
    } else {
        None
    }
}

/// Parse a version string, tolerating a leading `v`
fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}
