//! Project manifest schema and parsing.
//!
//! `verpin.toml` declares the two input collections of a resolution pass:
//! `[[managed]]` entries forming the managed catalog and `[[dependencies]]`
//! entries forming the requested list. Raw serde structs are converted into
//! validated domain values here, so malformed coordinates fail the load
//! instead of leaking into key construction.

use serde::Deserialize;

use super::{AppError, Coordinate, Dependency};

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    managed: Vec<RawDependency>,
    #[serde(default)]
    dependencies: Vec<RawDependency>,
}

#[derive(Debug, Deserialize)]
struct RawDependency {
    group: String,
    artifact: String,
    version: Option<String>,
    scope: Option<String>,
    classifier: Option<String>,
    #[serde(default)]
    exclusions: Vec<RawExclusion>,
}

#[derive(Debug, Deserialize)]
struct RawExclusion {
    group: String,
    artifact: String,
}

impl RawDependency {
    fn into_dependency(self) -> Result<Dependency, AppError> {
        let coordinate = Coordinate::new(&self.group, &self.artifact)?;
        let exclusions = self
            .exclusions
            .into_iter()
            .map(|exclusion| Coordinate::new(&exclusion.group, &exclusion.artifact))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dependency {
            coordinate,
            version: self.version,
            scope: self.scope,
            classifier: self.classifier,
            exclusions,
        })
    }
}

/// Parsed and validated project manifest.
#[derive(Debug, Clone)]
pub struct ProjectManifest {
    /// Entries forming the managed catalog.
    pub managed: Vec<Dependency>,
    /// Requested dependencies to resolve, in declaration order.
    pub dependencies: Vec<Dependency>,
}

impl ProjectManifest {
    /// Parse manifest content into validated domain values.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let raw: RawManifest = toml::from_str(content)?;
        let managed = raw
            .managed
            .into_iter()
            .map(RawDependency::into_dependency)
            .collect::<Result<Vec<_>, _>>()?;
        let dependencies = raw
            .dependencies
            .into_iter()
            .map(RawDependency::into_dependency)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { managed, dependencies })
    }
}
