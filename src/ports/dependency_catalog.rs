//! Managed dependency catalog port definition.

use crate::domain::Dependency;

/// Trait for read-only access to the managed dependency catalog.
///
/// Keys are management keys as built by `Coordinate::management_key`. The
/// catalog must not change for the duration of a resolution pass.
pub trait DependencyCatalog {
    /// Get the managed entry for a management key.
    fn get(&self, key: &str) -> Option<&Dependency>;
}
