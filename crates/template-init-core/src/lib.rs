//! Template Init Core - turns the generic component-library template into a
//! client-specific package
//!
//! A run substitutes literal placeholders (the template's package names,
//! organization and boilerplate description) across a fixed set of files,
//! records a marker so the directory is not initialized twice by accident,
//! and checks afterwards that no placeholder survived.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure functions** - validators (`validate`) and the replacement map (`replacements`)
//! - **Layer 2: Filesystem** - file primitives with backups (`files`), marker and verification (`marker`)
//! - **Layer 3: Orchestration** - `run_init` driving a `PromptProvider`, producing a `RunReport`
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! Every operation takes the project root explicitly; nothing depends on the
//! process working directory.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interactive prompts
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use template_init_core::{run_init, InitOptions, PresetAnswers, PresetValues};
//!
//! let options = InitOptions { root: "my-lib".into(), dry_run: true, ..Default::default() };
//! let mut prompts = PresetAnswers::new(PresetValues { /* ... */ ..Default::default() }, false);
//! let report = run_init(&options, &mut prompts).await;
//! println!("{}", report.to_json()?);
//! ```

pub mod answers;
pub mod files;
pub mod init;
pub mod marker;
pub mod options;
pub mod prompt;
pub mod replacements;
pub mod report;
pub mod template;
pub mod validate;
pub mod version;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{Field, UserAnswers};
pub use files::FileError;
pub use init::{perform_replacements, run_init};
pub use marker::{
    check_directory_conflict, create_template_config, verify_replacements, ConflictCheck,
    ConflictReason, TemplateConfig,
};
pub use options::InitOptions;
pub use prompt::{PresetAnswers, PresetValues, PromptProvider};
pub use replacements::{
    apply_replacements, create_replacement_map, escape_regexp, files_to_modify, ReplacementMap,
};
pub use report::{FileResult, Outcome, RunReport};
pub use validate::Validation;

#[cfg(feature = "tui")]
pub use tui::InteractivePrompts;
