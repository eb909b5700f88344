//! Managed version resolution.
//!
//! A pure batch transform: each requested dependency is looked up in the
//! managed catalog by its management key and mapped to one
//! [`ResolutionOutcome`], in input order. The resolver holds no state and
//! performs no I/O; applying the outcomes (property publication, warnings)
//! is the caller's job.

use crate::domain::{Dependency, ResolutionOutcome};
use crate::ports::DependencyCatalog;

/// Service resolving requested dependencies against the managed catalog.
pub struct VersionResolver;

impl VersionResolver {
    /// Resolve each requested dependency, yielding one outcome per input
    /// element in input order.
    ///
    /// Entries are resolved independently: no outcome affects another, there
    /// is no early termination, and duplicate keys are each resolved and
    /// reported on their own. A managed entry whose version is empty or
    /// absent counts as not found.
    pub fn resolve<C: DependencyCatalog>(
        requested: &[Dependency],
        catalog: &C,
    ) -> Vec<ResolutionOutcome> {
        requested.iter().map(|dependency| Self::resolve_one(dependency, catalog)).collect()
    }

    fn resolve_one<C: DependencyCatalog>(
        dependency: &Dependency,
        catalog: &C,
    ) -> ResolutionOutcome {
        let key = dependency.management_key();
        let managed_version =
            catalog.get(&key).and_then(Dependency::effective_version).map(str::to_string);

        match managed_version {
            Some(resolved_version) => {
                let description = dependency.describe(&resolved_version);
                ResolutionOutcome::Resolved { key, resolved_version, description }
            }
            None if dependency.effective_version().is_none() => {
                ResolutionOutcome::UnmanagedNoVersion { key }
            }
            None => ResolutionOutcome::UnmanagedHasVersion { key },
        }
    }
}
