use super::Coordinate;

/// One dependency declaration.
///
/// The same shape serves both roles the manifest declares: an entry of the
/// managed catalog and a requested dependency to resolve. Only the
/// coordinate is mandatory; a requested dependency frequently has no
/// version of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub coordinate: Coordinate,
    pub version: Option<String>,
    pub scope: Option<String>,
    pub classifier: Option<String>,
    pub exclusions: Vec<Coordinate>,
}

impl Dependency {
    /// Create a bare dependency for a coordinate, with no version, scope,
    /// classifier, or exclusions.
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate, version: None, scope: None, classifier: None, exclusions: Vec::new() }
    }

    /// The management key used for catalog lookups.
    pub fn management_key(&self) -> String {
        self.coordinate.management_key()
    }

    /// The version, with an empty string normalized to absent.
    ///
    /// A managed entry carrying `version = ""` counts as unversioned, the
    /// same as one carrying no version at all.
    pub fn effective_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    /// Render the reporting summary for this dependency once it resolved to
    /// `resolved_version`.
    ///
    /// Format: management key, the dependency's own version if present, the
    /// resolved version, then a brace block listing scope, classifier, a
    /// repetition of the dependency's own version, and the exclusion keys.
    /// The own version deliberately appears twice (after the key and again
    /// inside the block, between classifier and exclusions); downstream log
    /// scraping keys on this exact shape, so it is reproduced verbatim.
    pub fn describe(&self, resolved_version: &str) -> String {
        let mut out = self.management_key();
        if let Some(version) = self.effective_version() {
            out.push(':');
            out.push_str(version);
        }
        out.push(':');
        out.push_str(resolved_version);
        out.push_str(" {");
        if let Some(scope) = &self.scope {
            out.push_str(" scope: ");
            out.push_str(scope);
        }
        if let Some(classifier) = &self.classifier {
            out.push_str(" classifier:");
            out.push_str(classifier);
        }
        if let Some(version) = self.effective_version() {
            out.push(':');
            out.push_str(version);
        }
        if !self.exclusions.is_empty() {
            let keys: Vec<String> =
                self.exclusions.iter().map(Coordinate::management_key).collect();
            out.push_str(" exclusions: { ");
            out.push_str(&keys.join(", "));
            out.push_str(" }");
        }
        out.push_str(" }");
        out
    }
}
