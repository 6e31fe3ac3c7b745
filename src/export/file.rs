//! File naming and PNG writing for exported drawings.

use super::types::ExportError;
use crate::draw::{Color, EXPORT_HEIGHT, EXPORT_WIDTH, Raster};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename prefix used when none is configured.
pub const DEFAULT_FILENAME_PREFIX: &str = "drawing";

/// Where and how exported drawings are written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Directory exports are saved to.
    pub directory: PathBuf,
    /// Filename prefix; the file is named `<prefix>_<unix millis>.png`.
    pub filename_prefix: String,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Opaque background color, or `None` for a transparent background.
    pub background: Option<Color>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            width: EXPORT_WIDTH,
            height: EXPORT_HEIGHT,
            background: None,
        }
    }
}

/// Platform picture directory, falling back to the home directory.
pub fn default_export_directory() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Milliseconds since the Unix epoch.
pub fn current_unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Builds `<prefix>_<millis>.png`.
pub fn generate_filename(prefix: &str, unix_millis: i64) -> String {
    format!("{}_{}.png", prefix, unix_millis)
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Write already-encoded PNG bytes to `destination`.
pub fn save_png(png_data: &[u8], destination: &Path) -> Result<PathBuf, ExportError> {
    log::info!(
        "Saving drawing to: {} ({} bytes)",
        destination.display(),
        png_data.len()
    );

    fs::write(destination, png_data)?;

    let written_size = fs::metadata(destination)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(destination.to_path_buf())
}

/// Encode `raster` as PNG and write it to `destination`.
pub fn export_png(raster: &Raster, destination: &Path) -> Result<PathBuf, ExportError> {
    let png_data = raster.encode_png()?;
    save_png(&png_data, destination)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::rasterize;
    use tempfile::TempDir;

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("drawing", 1_700_000_000_123);
        assert_eq!(filename, "drawing_1700000000123.png");
    }

    #[test]
    fn test_current_millis_is_after_2020() {
        assert!(current_unix_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_default_settings() {
        let settings = ExportSettings::default();
        assert_eq!(settings.width, 1080);
        assert_eq!(settings.height, 1920);
        assert_eq!(settings.filename_prefix, "drawing");
        assert!(settings.background.is_none());
    }

    #[test]
    fn ensure_directory_creates_missing_path() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        let resolved = ensure_directory_exists(&nested).unwrap();
        assert!(resolved.is_dir());
    }

    #[test]
    fn export_png_writes_file() {
        let temp = TempDir::new().unwrap();
        let destination = temp.path().join("out.png");
        let raster = rasterize(&[], 10, 20).unwrap();

        let saved = export_png(&raster, &destination).unwrap();
        assert_eq!(saved, destination);
        let bytes = fs::read(&destination).unwrap();
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn export_png_to_missing_directory_fails_with_io_error() {
        let temp = TempDir::new().unwrap();
        let destination = temp.path().join("missing").join("out.png");
        let raster = rasterize(&[], 4, 4).unwrap();

        let err = export_png(&raster, &destination).unwrap_err();
        assert!(matches!(err, ExportError::SaveError(_)));
    }
}
