//! Equality and containment with optional case folding.

/// Structural string equality.
///
/// Case-sensitive by default; with `case_sensitive` false both operands are
/// lowercased before comparison.
pub fn is_equal(input: &str, comparison: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        input == comparison
    } else {
        input.to_lowercase() == comparison.to_lowercase()
    }
}

/// Substring containment, case folded when `case_sensitive` is false.
///
/// The empty needle is contained in every string.
pub fn contains(input: &str, needle: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        input.contains(needle)
    } else {
        input.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_equal() {
        assert!(is_equal("hello", "hello", true));
        assert!(!is_equal("Hello", "hello", true));
        assert!(is_equal("Hello", "hello", false));
        assert!(!is_equal("world", "word", false));
        assert!(is_equal("", "", true));
    }

    #[test]
    fn test_contains() {
        assert!(contains("Hello World", "World", true));
        assert!(!contains("Hello World", "world", true));
        assert!(contains("Hello World", "world", false));
        assert!(contains("JavaScript", "Script", false));
        assert!(contains("anything", "", true));
        assert!(!contains("", "needle", true));
    }
}
