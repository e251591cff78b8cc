//! Validation of the answers collected from the user
//!
//! Validators never fail for bad input: they return [`Validation::Invalid`]
//! with a message suitable for showing next to the prompt.

use std::fmt;

/// Maximum length of an npm package name
const MAX_PACKAGE_NAME_LEN: usize = 214;

/// Maximum length of a package description (after trimming)
const MAX_DESCRIPTION_LEN: usize = 500;

/// Maximum length of a client name (after trimming)
const MAX_CLIENT_NAME_LEN: usize = 100;

/// Outcome of validating a single answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(String),
}

impl Validation {
    fn invalid(reason: impl Into<String>) -> Self {
        Validation::Invalid(reason.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// The error message, if the value was rejected
    pub fn reason(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(reason) => Some(reason),
        }
    }

    /// Convert into the `Result` shape expected by prompt validators
    pub fn into_result(self) -> Result<(), String> {
        match self {
            Validation::Valid => Ok(()),
            Validation::Invalid(reason) => Err(reason),
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Valid => write!(f, "valid"),
            Validation::Invalid(reason) => write!(f, "{}", reason),
        }
    }
}

const CHARSET_MESSAGE: &str =
    "Package name must be lowercase and may only contain letters, digits, '-', '_', '.' and '~'";

fn is_package_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~')
}

/// Length as counted by npm and JavaScript tooling (UTF-16 code units)
fn utf16_len(input: &str) -> usize {
    input.encode_utf16().count()
}

/// Validate one segment of a package name (the scope or the bare name)
fn validate_name_segment(segment: &str, what: &str) -> Validation {
    if segment.is_empty() {
        return Validation::invalid(format!(
            "Scoped package names need a non-empty {} (e.g. @acme/ui)",
            what
        ));
    }
    if !segment.chars().all(is_package_char) {
        return Validation::invalid(CHARSET_MESSAGE);
    }
    if segment.starts_with('.') || segment.starts_with('_') {
        return Validation::invalid(format!("Package {} cannot start with '.' or '_'", what));
    }
    Validation::Valid
}

/// Validate an npm-style package name, scoped (`@scope/name`) or unscoped
pub fn validate_package_name(input: &str) -> Validation {
    if input.is_empty() {
        return Validation::invalid("Package name cannot be empty");
    }
    if utf16_len(input) > MAX_PACKAGE_NAME_LEN {
        return Validation::invalid(format!(
            "Package name must be {} characters or fewer",
            MAX_PACKAGE_NAME_LEN
        ));
    }

    match input.strip_prefix('@') {
        Some(scoped) => {
            // Bad characters are reported before the shape of the name
            if !scoped.chars().all(|c| c == '/' || is_package_char(c)) {
                return Validation::invalid(CHARSET_MESSAGE);
            }

            let mut parts = scoped.split('/');
            let scope = parts.next().unwrap_or_default();
            let Some(name) = parts.next() else {
                return Validation::invalid(
                    "Scoped package names must have the form @scope/name",
                );
            };
            if parts.next().is_some() {
                return Validation::invalid(
                    "Scoped package names must contain exactly one '/'",
                );
            }
            match validate_name_segment(scope, "scope") {
                Validation::Valid => validate_name_segment(name, "name"),
                invalid => invalid,
            }
        }
        None => validate_name_segment(input, "name"),
    }
}

/// Validate a `#RGB` or `#RRGGBB` colour
pub fn validate_hex_colour(input: &str) -> Validation {
    let valid = input
        .strip_prefix('#')
        .is_some_and(|digits| {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        });

    if valid {
        Validation::Valid
    } else {
        Validation::invalid("Colour must be a valid hex code, e.g. #3B82F6 or #FFF")
    }
}

/// Shared trim-then-bound check for free-text answers
fn validate_free_text(input: &str, label: &str, max_len: usize) -> Validation {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Validation::invalid(format!("{} cannot be empty", label));
    }
    if utf16_len(trimmed) > max_len {
        return Validation::invalid(format!(
            "{} must be {} characters or fewer",
            label, max_len
        ));
    }
    Validation::Valid
}

/// Validate the package description
pub fn validate_description(input: &str) -> Validation {
    validate_free_text(input, "Description", MAX_DESCRIPTION_LEN)
}

/// Validate the client / organization name
pub fn validate_client_name(input: &str) -> Validation {
    validate_free_text(input, "Client name", MAX_CLIENT_NAME_LEN)
}
