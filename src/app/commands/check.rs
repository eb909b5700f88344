//! Check command: report resolution state without writing anything.

use crate::domain::{AppError, ProjectManifest, ResolutionOutcome};
use crate::ports::ProjectStore;
use crate::services::{ManagedCatalog, VersionResolver};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Treat unmanaged versionless dependencies as failures.
    pub strict: bool,
}

/// Outcome of a check run.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Count of dependencies resolved from the managed catalog.
    pub resolved: usize,
    /// Count of dependencies carrying their own version with no managed entry.
    pub unmanaged_has_version: usize,
    /// Management keys of dependencies with neither a managed nor an own
    /// version, in manifest order.
    pub unmanaged_no_version: Vec<String>,
    /// Exit code under the requested policy. Escalation is deliberately a
    /// caller decision; the resolution core never treats an unmanaged
    /// dependency as an error.
    pub exit_code: i32,
}

/// Run the same resolution pass as `resolve`, but only tally the outcomes.
pub fn execute<S: ProjectStore>(
    store: &S,
    options: &CheckOptions,
) -> Result<CheckReport, AppError> {
    let manifest = ProjectManifest::parse(&store.read_manifest()?)?;
    let catalog = ManagedCatalog::from_entries(manifest.managed);
    let outcomes = VersionResolver::resolve(&manifest.dependencies, &catalog);

    let mut resolved = 0;
    let mut unmanaged_has_version = 0;
    let mut unmanaged_no_version = Vec::new();
    for outcome in outcomes {
        match outcome {
            ResolutionOutcome::Resolved { .. } => resolved += 1,
            ResolutionOutcome::UnmanagedHasVersion { .. } => unmanaged_has_version += 1,
            ResolutionOutcome::UnmanagedNoVersion { key } => unmanaged_no_version.push(key),
        }
    }

    let exit_code = if options.strict && !unmanaged_no_version.is_empty() { 1 } else { 0 };

    Ok(CheckReport { resolved, unmanaged_has_version, unmanaged_no_version, exit_code })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryProjectStore;

    const MIXED_MANIFEST: &str = r#"
        [[managed]]
        group = "g"
        artifact = "a"
        version = "2.0"

        [[dependencies]]
        group = "g"
        artifact = "a"

        [[dependencies]]
        group = "g"
        artifact = "b"
        version = "1.0"

        [[dependencies]]
        group = "g"
        artifact = "c"
    "#;

    #[test]
    fn tallies_outcomes_by_kind() {
        let store = InMemoryProjectStore::with_manifest(MIXED_MANIFEST);

        let report = execute(&store, &CheckOptions::default()).unwrap();

        assert_eq!(report.resolved, 1);
        assert_eq!(report.unmanaged_has_version, 1);
        assert_eq!(report.unmanaged_no_version, vec!["g:c".to_string()]);
        assert_eq!(report.exit_code, 0);
        assert!(store.written_properties().is_empty());
    }

    #[test]
    fn strict_mode_fails_on_unmanaged_versionless_dependencies() {
        let store = InMemoryProjectStore::with_manifest(MIXED_MANIFEST);

        let report = execute(&store, &CheckOptions { strict: true }).unwrap();

        assert_eq!(report.exit_code, 1);
    }

    #[test]
    fn strict_passes_when_everything_is_versioned() {
        let store = InMemoryProjectStore::with_manifest(
            r#"
            [[managed]]
            group = "g"
            artifact = "a"
            version = "2.0"

            [[dependencies]]
            group = "g"
            artifact = "a"

            [[dependencies]]
            group = "g"
            artifact = "b"
            version = "1.0"
            "#,
        );

        let report = execute(&store, &CheckOptions { strict: true }).unwrap();

        assert_eq!(report.exit_code, 0);
    }
}
