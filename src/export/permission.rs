//! Storage permission collaborator.

use super::{file, types::PermissionStatus};
use async_trait::async_trait;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Gate on write access to the export location.
///
/// `request_permission` may involve the user (a system dialog), so its answer
/// arrives asynchronously.
#[async_trait]
pub trait StoragePermission: Send + Sync {
    fn has_permission(&self) -> bool;
    async fn request_permission(&self) -> PermissionStatus;
}

/// Desktop stand-in for a storage permission prompt.
///
/// Access counts as granted once this process can create a file in the
/// export directory; a request is granted by creating the directory.
#[derive(Debug, Clone)]
pub struct DirectoryPermission {
    directory: PathBuf,
}

impl DirectoryPermission {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

#[async_trait]
impl StoragePermission for DirectoryPermission {
    fn has_permission(&self) -> bool {
        self.directory.is_dir() && NamedTempFile::new_in(&self.directory).is_ok()
    }

    async fn request_permission(&self) -> PermissionStatus {
        match file::ensure_directory_exists(&self.directory) {
            Ok(_) if self.has_permission() => PermissionStatus::Granted,
            Ok(_) => {
                log::warn!(
                    "Export directory {} is not writable",
                    self.directory.display()
                );
                PermissionStatus::Denied
            }
            Err(err) => {
                log::warn!(
                    "Cannot prepare export directory {}: {}",
                    self.directory.display(),
                    err
                );
                PermissionStatus::Denied
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn existing_directory_is_granted() {
        let temp = TempDir::new().unwrap();
        let permission = DirectoryPermission::new(temp.path());
        assert!(permission.has_permission());
    }

    #[tokio::test]
    async fn request_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("exports");
        let permission = DirectoryPermission::new(&target);

        assert!(!permission.has_permission());
        assert_eq!(
            permission.request_permission().await,
            PermissionStatus::Granted
        );
        assert!(permission.has_permission());
        assert!(target.is_dir());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn read_only_directory_is_denied() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

        // Privileged users write through the mode bits; nothing to check then.
        let writable = NamedTempFile::new_in(&locked).is_ok();
        let permission = DirectoryPermission::new(&locked);
        if !writable {
            assert!(!permission.has_permission());
            assert_eq!(
                permission.request_permission().await,
                PermissionStatus::Denied
            );
        }

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn writability_check_leaves_no_files() {
        let temp = TempDir::new().unwrap();
        let permission = DirectoryPermission::new(temp.path());
        assert!(permission.has_permission());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn request_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let permission = DirectoryPermission::new(blocker.join("exports"));

        assert_eq!(
            permission.request_permission().await,
            PermissionStatus::Denied
        );
    }
}
