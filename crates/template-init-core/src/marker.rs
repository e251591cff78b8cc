//! Marker file handling and post-run verification
//!
//! The marker (`.template-config.json`) records that a directory has been
//! initialized. It is advisory: a marker that cannot be parsed is treated as
//! absent so a fresh run can proceed.

use crate::answers::UserAnswers;
use crate::files::{self, FileError, Result};
use crate::template::{
    files_to_modify, verification_placeholders, MARKER_FILE, ORIGINAL_TEMPLATE, TEMPLATE_VERSION,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted record of a completed initialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub initialized: bool,
    pub initialized_at: String,
    pub package_name: String,
    pub client_name: String,
    pub primary_colour: String,
    pub description: String,
    pub original_template: String,
    pub template_version: String,
}

impl TemplateConfig {
    /// Marker contents for a run that has just completed
    pub fn new(answers: &UserAnswers) -> Self {
        Self {
            initialized: true,
            initialized_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            package_name: answers.package_name.clone(),
            client_name: answers.client_name.clone(),
            primary_colour: answers.primary_colour.clone(),
            description: answers.description.clone(),
            original_template: ORIGINAL_TEMPLATE.to_string(),
            template_version: TEMPLATE_VERSION.to_string(),
        }
    }
}

/// Lenient view of a marker file; every field may be missing
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MarkerProbe {
    initialized: bool,
    package_name: Option<String>,
    client_name: Option<String>,
    template_version: Option<String>,
}

/// Why a directory cannot be initialized without confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    AlreadyInitialized,
}

impl ConflictReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictReason::AlreadyInitialized => "already-initialized",
        }
    }
}

/// Result of checking a directory for a previous initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictCheck {
    Clear,
    Conflict {
        reason: ConflictReason,
        package_name: Option<String>,
        client_name: Option<String>,
        template_version: Option<String>,
    },
}

/// Location of the marker file for a project root
pub fn marker_path(root: &Path) -> PathBuf {
    root.join(MARKER_FILE)
}

/// Look for a marker left by an earlier run
pub async fn check_directory_conflict(root: &Path) -> Result<ConflictCheck> {
    let path = marker_path(root);

    let content = match files::read_file(&path).await {
        Ok(content) => content,
        Err(e) if e.is_not_found() => return Ok(ConflictCheck::Clear),
        Err(e) => return Err(e),
    };

    let probe: MarkerProbe = match serde_json::from_str(&content) {
        Ok(probe) => probe,
        Err(e) => {
            tracing::warn!(
                marker = %path.display(),
                error = %e,
                "Ignoring unreadable marker file"
            );
            return Ok(ConflictCheck::Clear);
        }
    };

    if !probe.initialized {
        return Ok(ConflictCheck::Clear);
    }

    Ok(ConflictCheck::Conflict {
        reason: ConflictReason::AlreadyInitialized,
        package_name: probe.package_name,
        client_name: probe.client_name,
        template_version: probe.template_version,
    })
}

/// Write the marker for a completed run, replacing any existing one
pub async fn create_template_config(root: &Path, answers: &UserAnswers) -> Result<TemplateConfig> {
    let path = marker_path(root);
    let config = TemplateConfig::new(answers);

    let mut json = serde_json::to_string_pretty(&config).map_err(|e| FileError::Json {
        path: path.clone(),
        source: e,
    })?;
    json.push('\n');

    files::write_file(&path, &json).await?;
    tracing::info!(marker = %path.display(), "Marker file written");
    Ok(config)
}

/// Whether `content` still contains any template placeholder
pub fn contains_placeholders(content: &str) -> bool {
    verification_placeholders().any(|p| content.contains(p))
}

/// Check that no template placeholder remains in any target file
pub async fn verify_replacements(root: &Path) -> Result<bool> {
    let mut clean = true;

    for file in files_to_modify() {
        let path = root.join(file);
        if !files::file_exists(&path).await {
            continue;
        }

        let content = files::read_file(&path).await?;
        if contains_placeholders(&content) {
            tracing::warn!(file = %file, "Template placeholders remain");
            clean = false;
        }
    }

    Ok(clean)
}
