//! Placeholder substitution
//!
//! The replacement map is a flat, insertion-ordered `search -> replacement`
//! table. Application is a single pass over the original text: every key is
//! escaped and joined into one alternation, so text produced by one
//! replacement is never matched again by another key.

use crate::answers::UserAnswers;
use crate::template::{
    PRIMARY_COLOUR_PLACEHOLDER, TEMPLATE_DESCRIPTION, TEMPLATE_ORGANIZATION,
    TEMPLATE_PACKAGE_NAMES,
};
use indexmap::IndexMap;
use regex::Regex;

pub use crate::template::files_to_modify;

/// Characters with special meaning in a regular expression
const REGEX_SPECIAL: &[char] = &[
    '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}', '/', '-',
];

/// Ordered mapping from placeholder text to its replacement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: IndexMap<String, String>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or overwrite) a replacement, keeping the original insertion position
    pub fn insert(&mut self, search: impl Into<String>, replacement: impl Into<String>) {
        self.entries.insert(search.into(), replacement.into());
    }

    pub fn get(&self, search: &str) -> Option<&str> {
        self.entries.get(search).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One regex matching any non-empty key, longest keys first so that the
    /// longer of two keys starting at the same position wins
    fn pattern(&self) -> Option<Regex> {
        if self.is_empty() {
            return None;
        }

        let mut keys: Vec<&str> = self
            .entries
            .keys()
            .map(String::as_str)
            .filter(|k| !k.is_empty())
            .collect();
        if keys.is_empty() {
            return None;
        }
        keys.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = keys
            .iter()
            .map(|k| escape_regexp(k))
            .collect::<Vec<_>>()
            .join("|");

        // Escaped literals always form a valid pattern
        Regex::new(&alternation).ok()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplacementMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Build the substitutions that turn the template into the client's package
pub fn create_replacement_map(answers: &UserAnswers) -> ReplacementMap {
    let mut map = ReplacementMap::new();

    for name in TEMPLATE_PACKAGE_NAMES {
        map.insert(*name, answers.package_name.as_str());
    }
    map.insert(TEMPLATE_ORGANIZATION, answers.client_name.as_str());
    map.insert(TEMPLATE_DESCRIPTION, answers.description.as_str());
    map.insert(PRIMARY_COLOUR_PLACEHOLDER, answers.primary_colour.as_str());

    map
}

/// Escape every regex metacharacter so `input` matches only itself
pub fn escape_regexp(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if REGEX_SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Replace every occurrence of every key in `content`
pub fn apply_replacements(content: &str, map: &ReplacementMap) -> String {
    let Some(pattern) = map.pattern() else {
        return content.to_string();
    };

    pattern
        .replace_all(content, |caps: &regex::Captures<'_>| {
            let matched = &caps[0];
            map.get(matched).unwrap_or(matched).to_string()
        })
        .into_owned()
}
