use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// In-memory `ProjectStore` fake: serves a fixed manifest and records
/// property writes instead of touching the filesystem.
#[derive(Debug)]
pub(crate) struct InMemoryProjectStore {
    manifest: Option<String>,
    manifest_path: PathBuf,
    written: RefCell<Vec<(PathBuf, String)>>,
}

impl InMemoryProjectStore {
    /// Store serving the given manifest content.
    pub(crate) fn with_manifest(content: &str) -> Self {
        Self {
            manifest: Some(content.to_string()),
            manifest_path: PathBuf::from("verpin.toml"),
            written: RefCell::new(Vec::new()),
        }
    }

    /// Store with no manifest at all.
    pub(crate) fn empty() -> Self {
        Self {
            manifest: None,
            manifest_path: PathBuf::from("verpin.toml"),
            written: RefCell::new(Vec::new()),
        }
    }

    /// Every property write so far, in order.
    pub(crate) fn written_properties(&self) -> Vec<(PathBuf, String)> {
        self.written.borrow().clone()
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn read_manifest(&self) -> Result<String, AppError> {
        self.manifest
            .clone()
            .ok_or_else(|| AppError::ManifestMissing(self.manifest_path.display().to_string()))
    }

    fn write_properties(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.written.borrow_mut().push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
