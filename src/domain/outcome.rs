use serde::Serialize;

/// Result of resolving one requested dependency against the managed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// A managed entry with a non-empty version was found; the requested
    /// dependency inherits `resolved_version`.
    Resolved { key: String, resolved_version: String, description: String },

    /// No managed version exists and the request carries no version of its
    /// own. Warning-level: the caller should report it and move on.
    UnmanagedNoVersion { key: String },

    /// No managed version exists but the request already pins its own
    /// version. Nothing to do, not a problem.
    UnmanagedHasVersion { key: String },
}

impl ResolutionOutcome {
    /// The management key of the requested dependency this outcome is for.
    pub fn key(&self) -> &str {
        match self {
            ResolutionOutcome::Resolved { key, .. }
            | ResolutionOutcome::UnmanagedNoVersion { key }
            | ResolutionOutcome::UnmanagedHasVersion { key } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_accessor_covers_all_variants() {
        let resolved = ResolutionOutcome::Resolved {
            key: "g:a".to_string(),
            resolved_version: "2.0".to_string(),
            description: "g:a:2.0 { }".to_string(),
        };
        assert_eq!(resolved.key(), "g:a");
        assert_eq!(ResolutionOutcome::UnmanagedNoVersion { key: "g:b".to_string() }.key(), "g:b");
        assert_eq!(ResolutionOutcome::UnmanagedHasVersion { key: "g:c".to_string() }.key(), "g:c");
    }

    #[test]
    fn serializes_with_outcome_tag() {
        let outcome = ResolutionOutcome::UnmanagedNoVersion { key: "g:a".to_string() };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"outcome":"unmanaged_no_version","key":"g:a"}"#);
    }
}
