use std::collections::VecDeque;
use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use tokio::sync::{Mutex, mpsc, oneshot};

use crate::draw::Stroke;
use crate::export::{
    dependencies::ExportDependencies,
    file::{self, ExportSettings},
    pipeline::{ExportRequest, perform_export},
    types::{ExportError, ExportOutcome, ExportResult, ExportStatus},
};

struct QueuedExport {
    request: ExportRequest,
    reply: Option<oneshot::Sender<Result<ExportResult, ExportError>>>,
}

/// Runs exports on a background task, one at a time, in request order.
///
/// This bridges the synchronous UI thread with the async export pipeline.
/// Callers hand over an immutable stroke snapshot, so the UI can keep drawing
/// while an export renders.
#[derive(Clone)]
pub struct ExportManager {
    /// Channel for sending export requests.
    request_tx: mpsc::UnboundedSender<QueuedExport>,
    /// Shared status of the current export operation.
    status: Arc<Mutex<ExportStatus>>,
    /// Outcomes of finished exports not yet taken, oldest first.
    outcomes: Arc<Mutex<VecDeque<ExportOutcome>>>,
    /// Timestamp used in the most recently issued filename.
    last_stamp: Arc<AtomicI64>,
    settings: Arc<ExportSettings>,
}

impl ExportManager {
    /// Create a new export manager writing with the default file saver and
    /// directory permission for `settings.directory`.
    ///
    /// # Arguments
    /// * `runtime_handle` - Tokio runtime handle for spawning async tasks
    /// * `settings` - Export destination and raster settings
    pub fn new(runtime_handle: &tokio::runtime::Handle, settings: ExportSettings) -> Self {
        let dependencies = ExportDependencies::for_directory(&settings.directory);
        Self::with_dependencies(runtime_handle, settings, dependencies)
    }

    /// Create an export manager with custom dependencies (useful for testing).
    pub fn with_dependencies(
        runtime_handle: &tokio::runtime::Handle,
        settings: ExportSettings,
        dependencies: ExportDependencies,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<QueuedExport>();
        let status = Arc::new(Mutex::new(ExportStatus::Idle));
        let outcomes = Arc::new(Mutex::new(VecDeque::new()));
        let dependencies = Arc::new(dependencies);

        let status_clone = status.clone();
        let outcomes_clone = outcomes.clone();

        // Spawn background task to handle export requests
        runtime_handle.spawn(async move {
            while let Some(QueuedExport { request, reply }) = request_rx.recv().await {
                log::debug!("Processing export request: {:?}", request);

                *status_clone.lock().await = ExportStatus::InProgress;

                let result =
                    perform_export(request, dependencies.clone(), Some(status_clone.clone()))
                        .await;
                match &result {
                    Ok(export) => {
                        log::info!("Export saved to {}", export.saved_path.display());
                        *status_clone.lock().await = ExportStatus::Success;
                        outcomes_clone
                            .lock()
                            .await
                            .push_back(ExportOutcome::Success(export.clone()));
                    }
                    Err(e) => {
                        let error_message = e.to_string();
                        log::error!("Export failed: {}", error_message);
                        *status_clone.lock().await = ExportStatus::Failed(error_message.clone());
                        outcomes_clone
                            .lock()
                            .await
                            .push_back(ExportOutcome::Failed(error_message));
                    }
                }

                if let Some(reply) = reply {
                    // The requester may have stopped waiting; nothing to do then.
                    let _ = reply.send(result);
                }
            }
        });

        Self {
            request_tx,
            status,
            outcomes,
            last_stamp: Arc::new(AtomicI64::new(i64::MIN)),
            settings: Arc::new(settings),
        }
    }

    /// Settings every export from this manager uses.
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Queue an export of `strokes`.
    ///
    /// This is non-blocking and returns the generated filename immediately;
    /// the export itself happens in the background.
    pub fn request_export(&self, strokes: Arc<[Stroke]>) -> Result<String, ExportError> {
        let (request, filename) = self.build_request(strokes);
        self.request_tx
            .send(QueuedExport {
                request,
                reply: None,
            })
            .map_err(|_| ExportError::ManagerUnavailable)?;
        Ok(filename)
    }

    /// Queue an export of `strokes` and wait for it to finish.
    pub async fn export_now(&self, strokes: Arc<[Stroke]>) -> Result<ExportResult, ExportError> {
        let (request, _) = self.build_request(strokes);
        let (reply_tx, reply_rx) = oneshot::channel();
        self.request_tx
            .send(QueuedExport {
                request,
                reply: Some(reply_tx),
            })
            .map_err(|_| ExportError::ManagerUnavailable)?;

        reply_rx.await.map_err(|_| ExportError::ManagerUnavailable)?
    }

    /// Get the current export status.
    pub async fn get_status(&self) -> ExportStatus {
        self.status.lock().await.clone()
    }

    /// Take the oldest finished export outcome not yet taken.
    pub async fn take_result(&self) -> Option<ExportOutcome> {
        self.outcomes.lock().await.pop_front()
    }

    /// Try to take an outcome without waiting (non-blocking).
    pub fn try_take_result(&self) -> Option<ExportOutcome> {
        self.outcomes
            .try_lock()
            .ok()
            .and_then(|mut outcomes| outcomes.pop_front())
    }

    /// Reset status to idle.
    pub async fn reset(&self) {
        *self.status.lock().await = ExportStatus::Idle;
    }

    fn build_request(&self, strokes: Arc<[Stroke]>) -> (ExportRequest, String) {
        let filename =
            file::generate_filename(&self.settings.filename_prefix, self.next_stamp());
        let request = ExportRequest {
            strokes,
            width: self.settings.width,
            height: self.settings.height,
            background: self.settings.background,
            destination: self.settings.directory.join(&filename),
        };
        (request, filename)
    }

    /// Current epoch millis, bumped past the last issued stamp so two
    /// requests in the same millisecond never share a filename.
    fn next_stamp(&self) -> i64 {
        let now = file::current_unix_millis();
        let previous = self
            .last_stamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or(now);
        now.max(previous.saturating_add(1))
    }
}

#[cfg(test)]
impl ExportManager {
    pub(crate) fn with_closed_channel_for_test() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<QueuedExport>();
        drop(rx);
        Self {
            request_tx: tx,
            status: Arc::new(Mutex::new(ExportStatus::Idle)),
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            last_stamp: Arc::new(AtomicI64::new(i64::MIN)),
            settings: Arc::new(ExportSettings::default()),
        }
    }
}
