use super::AppError;
use super::validation::validate_coordinate_field;

/// A validated group/artifact coordinate pair.
///
/// Guarantees:
/// - Both fields non-empty
/// - Neither field contains ':', path separators, or whitespace
///
/// The management key `group:artifact` is derived from the two fields and is
/// the lookup key shared by the managed catalog and the resolver.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    group: String,
    artifact: String,
}

impl Coordinate {
    /// Validate and create a new `Coordinate`.
    ///
    /// Fails fast on a malformed field, naming the offending field, so a
    /// corrupt coordinate can never produce a malformed management key.
    pub fn new(group: &str, artifact: &str) -> Result<Self, AppError> {
        if !validate_coordinate_field(group) {
            return Err(AppError::InvalidCoordinate { field: "group", value: group.to_string() });
        }
        if !validate_coordinate_field(artifact) {
            return Err(AppError::InvalidCoordinate {
                field: "artifact",
                value: artifact.to_string(),
            });
        }
        Ok(Self { group: group.to_string(), artifact: artifact.to_string() })
    }

    /// Group identifier.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Artifact identifier.
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// The management key `group:artifact`.
    ///
    /// Single key builder for the whole crate: catalog construction and
    /// resolver lookups both go through here.
    pub fn management_key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}
