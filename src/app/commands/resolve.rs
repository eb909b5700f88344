//! Resolve command: reconcile requested dependencies and publish properties.

use std::path::PathBuf;

use crate::domain::{AppError, ProjectManifest, ResolutionOutcome};
use crate::ports::ProjectStore;
use crate::services::{ManagedCatalog, VersionResolver};

#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Destination of the derived properties file.
    pub output: PathBuf,
}

/// Outcome of a resolve run, for the CLI to report.
#[derive(Debug, Clone)]
pub struct ResolveReport {
    /// One outcome per requested dependency, in manifest order.
    pub outcomes: Vec<ResolutionOutcome>,
    /// Where the properties file was written.
    pub properties_path: PathBuf,
    /// Count of `Resolved` outcomes.
    pub resolved: usize,
    /// Count of `UnmanagedNoVersion` outcomes (warnings).
    pub unmanaged_no_version: usize,
}

/// Load the manifest, resolve every requested dependency, and write one
/// `<group>:<artifact>.version=<version>` line per resolved outcome.
///
/// Warnings never fail the run; the properties file is written even when
/// it ends up empty.
pub fn execute<S: ProjectStore>(
    store: &S,
    options: &ResolveOptions,
) -> Result<ResolveReport, AppError> {
    let manifest = ProjectManifest::parse(&store.read_manifest()?)?;
    let catalog = ManagedCatalog::from_entries(manifest.managed);
    let outcomes = VersionResolver::resolve(&manifest.dependencies, &catalog);

    store.write_properties(&options.output, &render_properties(&outcomes))?;

    let resolved =
        outcomes.iter().filter(|o| matches!(o, ResolutionOutcome::Resolved { .. })).count();
    let unmanaged_no_version = outcomes
        .iter()
        .filter(|o| matches!(o, ResolutionOutcome::UnmanagedNoVersion { .. }))
        .count();

    Ok(ResolveReport {
        outcomes,
        properties_path: options.output.clone(),
        resolved,
        unmanaged_no_version,
    })
}

/// Render the derived properties: `<key>.version=<version>`, one line per
/// resolved outcome, preserving resolution order.
fn render_properties(outcomes: &[ResolutionOutcome]) -> String {
    let mut content = String::new();
    for outcome in outcomes {
        if let ResolutionOutcome::Resolved { key, resolved_version, .. } = outcome {
            content.push_str(key);
            content.push_str(".version=");
            content.push_str(resolved_version);
            content.push('\n');
        }
    }
    content
}
