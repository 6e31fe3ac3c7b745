use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::export::{
    file,
    permission::{DirectoryPermission, StoragePermission},
    types::ExportError,
};

/// Abstraction over writing encoded PNG bytes to disk.
pub trait ExportFileSaver: Send + Sync {
    fn save(&self, png_data: &[u8], destination: &Path) -> Result<PathBuf, ExportError>;
}

/// Bundle of dependencies used by the export pipeline. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub saver: Arc<dyn ExportFileSaver>,
    pub permission: Arc<dyn StoragePermission>,
}

impl ExportDependencies {
    /// Default dependencies writing into `directory`.
    pub fn for_directory(directory: &Path) -> Self {
        Self {
            saver: Arc::new(DefaultFileSaver),
            permission: Arc::new(DirectoryPermission::new(directory)),
        }
    }
}

struct DefaultFileSaver;

impl ExportFileSaver for DefaultFileSaver {
    fn save(&self, png_data: &[u8], destination: &Path) -> Result<PathBuf, ExportError> {
        file::save_png(png_data, destination)
    }
}
