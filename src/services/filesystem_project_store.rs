use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Filesystem-based project store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    manifest: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a store reading the manifest at the given path.
    pub fn new(manifest: PathBuf) -> Self {
        Self { manifest }
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn read_manifest(&self) -> Result<String, AppError> {
        if !self.manifest.exists() {
            return Err(AppError::ManifestMissing(self.manifest.display().to_string()));
        }
        Ok(fs::read_to_string(&self.manifest)?)
    }

    fn write_properties(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        Ok(())
    }
}
