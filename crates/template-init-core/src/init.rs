//! The init run: conflict check, prompts, replacement, marker, verification
//!
//! [`run_init`] never returns an error. Every failure is folded into the
//! returned [`RunReport`], which the caller prints and turns into an exit code.

use crate::answers::UserAnswers;
use crate::files::{
    create_backup, file_exists, read_file, remove_backup, replace_in_file, restore_from_backup,
};
use crate::marker::{
    check_directory_conflict, contains_placeholders, create_template_config, verify_replacements,
    ConflictCheck,
};
use crate::options::InitOptions;
use crate::prompt::PromptProvider;
use crate::replacements::{apply_replacements, create_replacement_map, ReplacementMap};
use crate::report::{FileResult, RunReport};
use crate::template::{files_to_modify, TEMPLATE_VERSION};
use crate::version::check_compatibility;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Human-readable progress output, silent in JSON mode
struct Console {
    quiet: bool,
}

impl Console {
    fn new(options: &InitOptions) -> Self {
        Self {
            quiet: options.json,
        }
    }

    fn step(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{} {}", "->".blue(), message.as_ref());
        }
    }

    fn warn(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{} {}", "Warning:".yellow(), message.as_ref());
        }
    }
}

/// Run the initializer against `options.root`
pub async fn run_init(options: &InitOptions, prompts: &mut dyn PromptProvider) -> RunReport {
    let mut collected = None;

    match drive(options, prompts, &mut collected).await {
        Ok(report) => report,
        Err(e) => {
            tracing::debug!(error = %format!("{:#}", e), "Initialization failed");
            RunReport::failed(options.dry_run, collected, &e)
        }
    }
}

async fn drive(
    options: &InitOptions,
    prompts: &mut dyn PromptProvider,
    collected: &mut Option<UserAnswers>,
) -> Result<RunReport> {
    let console = Console::new(options);
    let root = options.root.as_path();
    let dry_run = options.dry_run;

    tracing::info!(root = %root.display(), dry_run, "Starting template initialization");

    let conflict = check_directory_conflict(root)
        .await
        .context("Failed to check for an existing initialization")?;

    if let ConflictCheck::Conflict {
        package_name,
        client_name,
        template_version,
        ..
    } = &conflict
    {
        tracing::info!(
            package = package_name.as_deref().unwrap_or("unknown"),
            client = client_name.as_deref().unwrap_or("unknown"),
            "Directory already initialized"
        );

        let reinit = options.force || prompts.confirm_reinit(&conflict)?;
        if !reinit {
            return Ok(RunReport::conflict(
                dry_run,
                package_name.clone(),
                client_name.clone(),
            ));
        }

        if let Some(warning) = template_version
            .as_deref()
            .and_then(|recorded| check_compatibility(TEMPLATE_VERSION, recorded))
        {
            console.warn(&warning);
            tracing::debug!(recorded = ?template_version, "Template version mismatch");
        }
        console.step("Re-initializing previously initialized project");
    }

    let answers = prompts.answers()?;
    answers
        .validate()
        .map_err(|(field, reason)| anyhow::anyhow!("Invalid {}: {}", field.label(), reason))?;
    *collected = Some(answers.clone());

    if !prompts.confirm(&answers)? {
        tracing::info!("Initialization cancelled by user");
        return Ok(RunReport::cancelled(dry_run, answers));
    }

    if dry_run {
        console.step("Dry run: computing changes without writing files");
    }

    let files = perform_replacements(root, &answers, dry_run).await?;
    for result in files.iter().filter(|r| r.modified) {
        console.step(format!(
            "{} {}",
            if dry_run { "Would update" } else { "Updated" },
            result.file
        ));
    }

    let verified = if dry_run {
        verify_simulated(root, &create_replacement_map(&answers)).await?
    } else {
        create_template_config(root, &answers)
            .await
            .context("Failed to write marker file")?;
        verify_replacements(root)
            .await
            .context("Failed to verify replacements")?
    };

    if !verified {
        tracing::info!("Template placeholders remain after replacement");
    }

    Ok(RunReport::completed(dry_run, answers, files, verified))
}

/// Apply the replacement map to every existing target file, in order.
///
/// Each file is backed up before it is rewritten; if the rewrite fails the
/// backup is restored and the error returned. Files that don't exist are
/// skipped. In dry-run mode nothing is written and `modified` reports
/// whether the file would change.
pub async fn perform_replacements(
    root: &Path,
    answers: &UserAnswers,
    dry_run: bool,
) -> Result<Vec<FileResult>> {
    let map = create_replacement_map(answers);
    let mut results = Vec::new();

    for file in files_to_modify() {
        let path = root.join(file);
        if !file_exists(&path).await {
            tracing::debug!(file = %file, "Skipping missing file");
            continue;
        }

        let modified = if dry_run {
            let content = read_file(&path)
                .await
                .with_context(|| format!("Failed to read {}", file))?;
            apply_replacements(&content, &map) != content
        } else {
            rewrite_with_backup(&path, &map)
                .await
                .with_context(|| format!("Failed to update {}", file))?
        };

        tracing::debug!(file = %file, modified, dry_run, "Processed file");
        results.push(FileResult {
            file: file.to_string(),
            modified,
        });
    }

    Ok(results)
}

async fn rewrite_with_backup(path: &Path, map: &ReplacementMap) -> Result<bool> {
    create_backup(path).await?;

    match replace_in_file(path, map).await {
        Ok(modified) => {
            remove_backup(path).await?;
            Ok(modified)
        }
        Err(e) => {
            if let Err(restore_err) = restore_from_backup(path).await {
                tracing::error!(
                    file = %path.display(),
                    error = %restore_err,
                    "Failed to restore backup"
                );
            }
            Err(e.into())
        }
    }
}

/// Verification for a dry run: check the contents the files would have
async fn verify_simulated(root: &Path, map: &ReplacementMap) -> Result<bool> {
    let mut clean = true;

    for file in files_to_modify() {
        let path = root.join(file);
        if !file_exists(&path).await {
            continue;
        }
        let content = read_file(&path)
            .await
            .with_context(|| format!("Failed to read {}", file))?;
        if contains_placeholders(&apply_replacements(&content, map)) {
            tracing::warn!(file = %file, "Template placeholders would remain");
            clean = false;
        }
    }

    Ok(clean)
}
