// Helper functions for text checks shared by the validation strategies

/// True for empty strings and strings made only of whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Case-insensitive equality
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive membership test against a fixed list of allowed values.
///
/// # Example
/// ```
/// use equipment_tracker::common::helpers::contains_ignore_case;
///
/// assert!(contains_ignore_case(&["Active", "Retired"], "retired"));
/// assert!(!contains_ignore_case(&["Active"], "Bogus"));
/// ```
pub fn contains_ignore_case(allowed: &[&str], value: &str) -> bool {
    allowed.iter().any(|candidate| eq_ignore_case(candidate, value))
}

/// Number of characters, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
