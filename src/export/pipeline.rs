use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::draw::{Color, Stroke, rasterize_with_background};
use crate::export::{
    dependencies::ExportDependencies,
    types::{ExportError, ExportResult, ExportStatus, PermissionStatus},
};
use tokio::{sync::Mutex, task};

#[derive(Clone)]
pub(crate) struct ExportRequest {
    pub(crate) strokes: Arc<[Stroke]>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) background: Option<Color>,
    pub(crate) destination: PathBuf,
}

impl fmt::Debug for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRequest")
            .field("strokes", &self.strokes.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("background", &self.background)
            .field("destination", &self.destination)
            .finish()
    }
}

/// Renders, encodes, and writes one export request.
///
/// A missing storage permission (or a write refused by the OS) triggers one
/// permission request; the write is retried once only if it is granted.
/// `status`, when given, reads `AwaitingPermission` while that request is open.
pub(crate) async fn perform_export(
    request: ExportRequest,
    dependencies: Arc<ExportDependencies>,
    status: Option<Arc<Mutex<ExportStatus>>>,
) -> Result<ExportResult, ExportError> {
    log::info!(
        "Starting export: {} strokes at {}x{}",
        request.strokes.len(),
        request.width,
        request.height
    );

    // Step 1: Rasterize and encode off the calling thread
    let png_data = encode_drawing(&request).await?;
    log::debug!("Encoded drawing: {} bytes", png_data.len());

    // Step 2: Write, asking for storage access once if needed
    let saved_path = match attempt_save(&dependencies, &png_data, &request.destination).await {
        Ok(path) => path,
        Err(err) if err.is_permission_failure() => {
            log::warn!("Export blocked ({}); requesting storage permission", err);
            if let Some(status) = &status {
                *status.lock().await = ExportStatus::AwaitingPermission;
            }
            match dependencies.permission.request_permission().await {
                PermissionStatus::Granted => {
                    log::info!("Storage permission granted, retrying export");
                    attempt_save(&dependencies, &png_data, &request.destination).await?
                }
                PermissionStatus::Denied => return Err(ExportError::PermissionDenied),
            }
        }
        Err(err) => return Err(err),
    };

    Ok(ExportResult {
        saved_path,
        bytes_written: png_data.len(),
        stroke_count: request.strokes.len(),
    })
}

async fn encode_drawing(request: &ExportRequest) -> Result<Arc<Vec<u8>>, ExportError> {
    let strokes = Arc::clone(&request.strokes);
    let (width, height, background) = (request.width, request.height, request.background);

    let png_data = task::spawn_blocking(move || {
        rasterize_with_background(&strokes, width, height, background)
            .and_then(|raster| raster.encode_png())
    })
    .await
    .map_err(|e| ExportError::TaskFailed(format!("Render task failed: {}", e)))??;

    Ok(Arc::new(png_data))
}

async fn attempt_save(
    dependencies: &ExportDependencies,
    png_data: &Arc<Vec<u8>>,
    destination: &Path,
) -> Result<PathBuf, ExportError> {
    if !dependencies.permission.has_permission() {
        return Err(ExportError::PermissionDenied);
    }

    let saver = Arc::clone(&dependencies.saver);
    let png_data = Arc::clone(png_data);
    let destination = destination.to_path_buf();

    task::spawn_blocking(move || saver.save(&png_data, &destination))
        .await
        .map_err(|e| ExportError::TaskFailed(format!("Save task failed: {}", e)))?
}
