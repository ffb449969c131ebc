//! Common types and utilities for kdlt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{KdltError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per token
    #[default]
    Text,
    /// A JSON array with one object per file
    Json,
}

impl OutputFormat {
    /// Get the name of this format as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Path Utilities
// ============================================================================

/// Read a document as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        KdltError::FileOperation(format!("{} {}: {}", error_messages::READ_FAILED, path.display(), e))
    })
}

/// Expand the given paths into the list of documents to process.
///
/// Files are taken as given, whatever their extension. Directories are
/// walked in name order and contribute the files whose extension matches one
/// of `extensions` (case-insensitive, leading dot optional).
pub fn collect_documents(
    paths: &[PathBuf],
    extensions: &[String],
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return Err(KdltError::Validation(error_messages::NO_INPUT_PATHS.to_string()));
    }

    let mut documents = Vec::new();
    for path in paths {
        if path.is_file() {
            documents.push(path.clone());
        } else if path.is_dir() {
            walk_directory(path, extensions, recursive, &mut documents)?;
        } else {
            return Err(KdltError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                path.display()
            )));
        }
    }

    tracing::debug!(count = documents.len(), "collected documents");
    Ok(documents)
}

fn walk_directory(
    dir: &Path,
    extensions: &[String],
    recursive: bool,
    documents: &mut Vec<PathBuf>,
) -> Result<()> {
    let mut entries = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            if recursive {
                walk_directory(&path, extensions, recursive, documents)?;
            }
        } else if has_extension(&path, extensions) {
            documents.push(path);
        }
    }
    Ok(())
}

/// Check whether `path` ends in one of `extensions`.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input paths are specified.
    pub const NO_INPUT_PATHS: &str = "No input files or directories specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when a document cannot be read.
    pub const READ_FAILED: &str = "Failed to read";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Label printed for skipped whitespace and comments.
    pub const SKIPPED: &str = "Skipped";

    /// Summary line prefix for the check command.
    pub const CHECKED: &str = "Checked";
}
