//! Run results and how they are presented
//!
//! A [`RunReport`] is the single source for both output modes: the JSON
//! object printed with `--json`, and the colored summary printed otherwise.

use crate::answers::UserAnswers;
use colored::Colorize;
use serde::Serialize;

/// Outcome of processing one target file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub file: String,
    pub modified: bool,
}

/// How the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Files processed (verification may still have flagged leftovers)
    Completed,
    /// The user declined at the confirmation step
    Cancelled,
    /// The directory was already initialized and re-initialization was refused
    Conflict,
    /// An error stopped the run
    Failed,
}

/// Everything reported at the end of a run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    #[serde(skip)]
    pub outcome: Outcome,
    pub success: bool,
    pub dry_run: bool,
    pub answers: Option<UserAnswers>,
    pub files_modified: usize,
    pub files: Vec<FileResult>,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_client: Option<String>,
}

impl RunReport {
    fn empty(outcome: Outcome, dry_run: bool) -> Self {
        Self {
            outcome,
            success: outcome == Outcome::Completed,
            dry_run,
            answers: None,
            files_modified: 0,
            files: Vec::new(),
            error: None,
            verified: None,
            existing_package: None,
            existing_client: None,
        }
    }

    pub fn completed(
        dry_run: bool,
        answers: UserAnswers,
        files: Vec<FileResult>,
        verified: bool,
    ) -> Self {
        Self {
            answers: Some(answers),
            files_modified: files.iter().filter(|f| f.modified).count(),
            files,
            verified: Some(verified),
            ..Self::empty(Outcome::Completed, dry_run)
        }
    }

    pub fn cancelled(dry_run: bool, answers: UserAnswers) -> Self {
        Self {
            answers: Some(answers),
            error: Some("Initialization cancelled".to_string()),
            ..Self::empty(Outcome::Cancelled, dry_run)
        }
    }

    pub fn conflict(
        dry_run: bool,
        existing_package: Option<String>,
        existing_client: Option<String>,
    ) -> Self {
        Self {
            error: Some("Directory has already been initialized".to_string()),
            existing_package,
            existing_client,
            ..Self::empty(Outcome::Conflict, dry_run)
        }
    }

    pub fn failed(dry_run: bool, answers: Option<UserAnswers>, error: &anyhow::Error) -> Self {
        Self {
            answers,
            error: Some(format!("{:#}", error)),
            ..Self::empty(Outcome::Failed, dry_run)
        }
    }

    /// Process exit status for this report
    pub fn exit_code(&self) -> i32 {
        match self.outcome {
            Outcome::Completed | Outcome::Cancelled => 0,
            Outcome::Conflict | Outcome::Failed => 1,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable summary lines
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        match self.outcome {
            Outcome::Completed => {
                let header = if self.dry_run {
                    "Dry run complete (no files were written)".cyan().bold()
                } else {
                    "Template initialized".green().bold()
                };
                lines.push(header.to_string());
                lines.push(String::new());

                for result in &self.files {
                    let (marker, status) = match (result.modified, self.dry_run) {
                        (true, true) => ("~".yellow(), "would change"),
                        (true, false) => ("✓".green(), "updated"),
                        (false, _) => ("-".dimmed(), "unchanged"),
                    };
                    lines.push(format!("  {} {} ({})", marker, result.file, status));
                }

                lines.push(String::new());
                let verb = if self.dry_run { "would be modified" } else { "modified" };
                lines.push(format!(
                    "{} of {} file(s) {}",
                    self.files_modified,
                    self.files.len(),
                    verb
                ));

                if self.verified == Some(false) {
                    lines.push(format!(
                        "{} Some template placeholders remain; review the files above",
                        "Warning:".yellow()
                    ));
                }
            }
            Outcome::Cancelled => {
                lines.push(format!("{}", "Initialization cancelled. No files were changed.".yellow()));
            }
            Outcome::Conflict => {
                lines.push(format!(
                    "{} This directory has already been initialized",
                    "Error:".red().bold()
                ));
                if let Some(package) = &self.existing_package {
                    lines.push(format!("  Package: {}", package));
                }
                if let Some(client) = &self.existing_client {
                    lines.push(format!("  Client:  {}", client));
                }
                lines.push("Run again with --force to re-initialize.".to_string());
            }
            Outcome::Failed => {
                lines.push(format!(
                    "{} {}",
                    "Error:".red().bold(),
                    self.error.as_deref().unwrap_or("unknown error")
                ));
            }
        }

        lines
    }
}
