//! Project file access port.
//!
//! The resolution core never touches the filesystem; reading the manifest
//! and writing the derived properties file go through this port so command
//! logic stays testable without a real project directory.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading the project manifest and publishing derived properties.
pub trait ProjectStore {
    /// Read the manifest as UTF-8 text.
    fn read_manifest(&self) -> Result<String, AppError>;

    /// Write the derived properties file.
    fn write_properties(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
