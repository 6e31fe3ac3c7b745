//! Drawing export for sketchpad.
//!
//! This module turns the committed stroke sequence into a PNG file:
//! - Rasterization and PNG encoding on a blocking worker
//! - `<prefix>_<unix millis>.png` file naming
//! - Storage permission gating with a single awaited retry
//! - A background manager that serializes export requests

pub mod file;
pub mod permission;
pub mod types;

mod dependencies;
mod manager;
mod pipeline;

pub use dependencies::{ExportDependencies, ExportFileSaver};
pub use file::{ExportSettings, export_png, generate_filename};
pub use manager::ExportManager;
pub use permission::{DirectoryPermission, StoragePermission};
pub use types::{ExportError, ExportOutcome, ExportResult, ExportStatus, PermissionStatus};
