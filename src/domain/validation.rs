/// Validates a coordinate field string.
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \) and no ':' (the key separator)
/// - Not "." or ".."
/// - Characters are alphanumeric, '-', '_', or '.'
pub fn validate_coordinate_field(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if value.contains('/') || value.contains('\\') || value.contains(':') {
        return false;
    }
    if value == "." || value == ".." {
        return false;
    }
    value.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_fields() {
        assert!(validate_coordinate_field("commons-io"));
        assert!(validate_coordinate_field("org.apache.commons"));
        assert!(validate_coordinate_field("jackson_core"));
        assert!(validate_coordinate_field("Log4j2"));
    }

    #[test]
    fn invalid_fields() {
        assert!(!validate_coordinate_field(""));
        assert!(!validate_coordinate_field("bad/field"));
        assert!(!validate_coordinate_field("bad\\field"));
        assert!(!validate_coordinate_field("bad:field"));
        assert!(!validate_coordinate_field("."));
        assert!(!validate_coordinate_field(".."));
        assert!(!validate_coordinate_field("has space"));
    }
}
