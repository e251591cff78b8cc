//! Filesystem primitives used by the initializer
//!
//! All operations take explicit paths; nothing here depends on the process
//! working directory. Missing files and I/O failures are reported through
//! [`FileError`] so the orchestrator can decide how to surface them.

use crate::replacements::{apply_replacements, ReplacementMap};
use crate::template::BACKUP_SUFFIX;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("No backup found for {}", .path.display())]
    BackupNotFound { path: PathBuf },

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FileError {
    /// Map an io error, keeping not-found distinct from other failures
    fn from_io(action: &'static str, path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            FileError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            FileError::Io {
                action,
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FileError::NotFound { .. })
    }
}

/// Path of the backup belonging to `path`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(BACKUP_SUFFIX);
    PathBuf::from(os)
}

/// Whether anything (file or directory) exists at `path`
pub async fn file_exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

/// Read a UTF-8 file
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| FileError::from_io("read", path, e))
}

/// Create or overwrite a file. The parent directory must already exist.
pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).await.map_err(|e| FileError::Io {
        action: "write",
        path: path.to_path_buf(),
        source: e,
    })
}

/// Apply `map` to the file at `path`, writing only when the content changes.
///
/// Returns whether the file was rewritten.
pub async fn replace_in_file(path: &Path, map: &ReplacementMap) -> Result<bool> {
    let original = read_file(path).await?;
    let updated = apply_replacements(&original, map);

    if updated == original {
        tracing::debug!(file = %path.display(), "No placeholders found");
        return Ok(false);
    }

    write_file(path, &updated).await?;
    tracing::debug!(file = %path.display(), "Placeholders replaced");
    Ok(true)
}

/// Copy `path` to its backup location, replacing any earlier backup
pub async fn create_backup(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup)
        .await
        .map_err(|e| FileError::from_io("back up", path, e))?;
    tracing::debug!(file = %path.display(), backup = %backup.display(), "Backup created");
    Ok(backup)
}

/// Put the backup of `path` back in place and delete the backup
pub async fn restore_from_backup(path: &Path) -> Result<()> {
    let backup = backup_path(path);
    if !fs::try_exists(&backup).await.unwrap_or(false) {
        return Err(FileError::BackupNotFound {
            path: path.to_path_buf(),
        });
    }

    fs::copy(&backup, path).await.map_err(|e| FileError::Io {
        action: "restore",
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::remove_file(&backup).await.map_err(|e| FileError::Io {
        action: "remove backup",
        path: backup.clone(),
        source: e,
    })?;

    tracing::debug!(file = %path.display(), "Restored from backup");
    Ok(())
}

/// Delete the backup of `path` if one exists
pub async fn remove_backup(path: &Path) -> Result<()> {
    let backup = backup_path(path);
    match fs::remove_file(&backup).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FileError::Io {
            action: "remove backup",
            path: backup,
            source: e,
        }),
    }
}
