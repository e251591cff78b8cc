//! Options controlling a single initializer run

use crate::prompt::PresetValues;
use std::path::PathBuf;

/// Options for the init run, independent of how they were parsed
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Project root containing the template files
    pub root: PathBuf,

    /// Report what would change without writing anything
    pub dry_run: bool,

    /// Emit per-operation logs
    pub verbose: bool,

    /// Print a single JSON object instead of human-readable output
    pub json: bool,

    /// Re-initialize a directory that already has a marker file
    pub force: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Answers supplied up front
    pub presets: PresetValues,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dry_run: false,
            verbose: false,
            json: false,
            force: false,
            yes: false,
            presets: PresetValues::default(),
        }
    }
}
