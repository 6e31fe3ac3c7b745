//! Data types for drawing export.

use crate::draw::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportResult {
    /// Path the PNG was written to.
    pub saved_path: PathBuf,
    /// Size of the encoded PNG in bytes.
    pub bytes_written: usize,
    /// Number of strokes in the exported snapshot.
    pub stroke_count: usize,
}

/// Outcome of an export request (success or failure).
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Success(ExportResult),
    Failed(String),
}

/// Status of the export worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// No export has run yet.
    Idle,
    /// An export is rendering or writing.
    InProgress,
    /// Waiting for the storage permission collaborator to answer.
    AwaitingPermission,
    /// Last export completed successfully.
    Success,
    /// Last export failed.
    Failed(String),
}

/// Answer from the storage permission collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Storage permission denied")]
    PermissionDenied,

    #[error("Failed to save drawing: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("Failed to render drawing: {0}")]
    RenderError(#[from] RenderError),

    #[error("Export task failed: {0}")]
    TaskFailed(String),

    #[error("Export manager not running")]
    ManagerUnavailable,
}

impl ExportError {
    /// Whether this failure means storage access was missing.
    pub fn is_permission_failure(&self) -> bool {
        match self {
            ExportError::PermissionDenied => true,
            ExportError::SaveError(err) => err.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }
}
