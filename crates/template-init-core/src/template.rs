//! Identity of the template being initialized
//!
//! Everything the initializer knows about the template it customizes lives
//! here: the placeholder strings baked into the template files, the fixed set
//! of files that may contain them, and the marker file recording a finished run.

/// Package name the template ships with, recorded as `originalTemplate` in the marker
pub const ORIGINAL_TEMPLATE: &str = "@syntek-studio/ui";

/// Version of the template recorded in the marker file
pub const TEMPLATE_VERSION: &str = "1.0.0";

/// Every spelling of the template's package name found in its files.
///
/// `@syntek/ui` is the name the package was published under before the
/// organization was renamed; both must be replaced.
pub const TEMPLATE_PACKAGE_NAMES: &[&str] = &["@syntek-studio/ui", "@syntek/ui"];

/// Organization / author name used throughout the template
pub const TEMPLATE_ORGANIZATION: &str = "Syntek Studio";

/// Boilerplate description shipped in the manifest and readme
pub const TEMPLATE_DESCRIPTION: &str =
    "A cross-platform UI component library for React and React Native";

/// Placeholder standing in for the client's primary brand colour
pub const PRIMARY_COLOUR_PLACEHOLDER: &str = "{{PRIMARY_COLOUR}}";

/// Marker file written at the project root after a successful run
pub const MARKER_FILE: &str = ".template-config.json";

/// Suffix appended to a file's path to form its backup path
pub const BACKUP_SUFFIX: &str = ".backup";

/// Files eligible for substitution, relative to the project root.
///
/// This list is fixed rather than discovered by walking the tree so that a
/// run only ever touches these paths.
const FILES_TO_MODIFY: &[&str] = &[
    "package.json",
    "README.md",
    ".claude/CLAUDE.md",
    "src/index.ts",
];

/// Files the initializer rewrites, in the order they are processed
pub fn files_to_modify() -> &'static [&'static str] {
    FILES_TO_MODIFY
}

/// Placeholders that must not survive a successful initialization
pub fn verification_placeholders() -> impl Iterator<Item = &'static str> {
    TEMPLATE_PACKAGE_NAMES
        .iter()
        .copied()
        .chain(std::iter::once(TEMPLATE_ORGANIZATION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_files_are_relative_and_unique() {
        let files = files_to_modify();
        let unique: HashSet<_> = files.iter().collect();
        assert_eq!(unique.len(), files.len());

        for file in files {
            assert!(!file.starts_with('/'), "{} is absolute", file);
            assert!(!file.contains('\\'), "{} is not platform neutral", file);
            assert!(
                !(file.len() > 1 && file.as_bytes()[1] == b':'),
                "{} has a drive letter",
                file
            );
        }
    }

    #[test]
    fn test_required_files_present() {
        let files = files_to_modify();
        assert!(files.contains(&"package.json"));
        assert!(files.contains(&"README.md"));
        assert!(files.contains(&"src/index.ts"));
        assert!(files
            .iter()
            .any(|f| f.starts_with('.') && f.contains('/')));
    }

    #[test]
    fn test_verification_placeholders_cover_names_and_organization() {
        let placeholders: Vec<_> = verification_placeholders().collect();
        assert!(placeholders.contains(&"@syntek-studio/ui"));
        assert!(placeholders.contains(&"@syntek/ui"));
        assert!(placeholders.contains(&"Syntek Studio"));
        assert!(!placeholders.contains(&TEMPLATE_DESCRIPTION));
    }
}
