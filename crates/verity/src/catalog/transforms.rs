//! Character-filtering transforms.
//!
//! Each transform walks the input once and keeps or drops characters; the
//! surviving characters stay in their original order. All transforms are
//! idempotent.

/// Keep only ASCII digits `0-9`.
pub fn only_numbers(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Keep only ASCII letters `a-zA-Z`.
///
/// Non-ASCII letters (accented Latin, non-Latin scripts) are stripped, not
/// preserved.
pub fn only_letters(input: &str) -> String {
    input.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Remove ASCII letters, ASCII digits, and whitespace; keep everything else.
///
/// Non-ASCII letters count as "special" and survive.
pub fn only_special_characters(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
        .collect()
}

/// Remove every character that appears in `exclude`.
///
/// `exclude` is treated as a character set, not a literal substring, and not
/// a regex: `]`, `\`, `^` and `-` have no special meaning.
pub fn exclude_these_characters(input: &str, exclude: &str) -> String {
    input.chars().filter(|c| !exclude.contains(*c)).collect()
}

/// Keep only characters present in `allowed`.
///
/// Each entry in `allowed` contributes all of its characters to the allowed
/// set, so single-character strings are the expected shape but longer entries
/// still behave sensibly.
pub fn include_only_these_characters<S: AsRef<str>>(input: &str, allowed: &[S]) -> String {
    input
        .chars()
        .filter(|c| allowed.iter().any(|s| s.as_ref().contains(*c)))
        .collect()
}

/// Remove leading and trailing whitespace only.
pub fn trim(input: &str) -> String {
    input.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_numbers() {
        assert_eq!(only_numbers("a1b2c3"), "123");
        assert_eq!(only_numbers("no digits"), "");
        assert_eq!(only_numbers("867-5309"), "8675309");
        assert_eq!(only_numbers(""), "");
    }

    #[test]
    fn test_only_letters_strips_non_ascii() {
        assert_eq!(only_letters("abc123"), "abc");
        assert_eq!(only_letters("héllo wörld"), "hllowrld");
        assert_eq!(only_letters("日本語abc"), "abc");
    }

    #[test]
    fn test_only_special_characters() {
        assert_eq!(only_special_characters("a!b@c#1 2"), "!@#");
        assert_eq!(only_special_characters("plain text"), "");
        // Non-ASCII letters are kept, not stripped.
        assert_eq!(only_special_characters("héllo!"), "é!");
    }

    #[test]
    fn test_exclude_these_characters() {
        assert_eq!(exclude_these_characters("hello world", "lo"), "he wrd");
        assert_eq!(exclude_these_characters("abc", ""), "abc");
        // Regex metacharacters are ordinary characters here.
        assert_eq!(exclude_these_characters("a-b]c^d", "-]^"), "abcd");
    }

    #[test]
    fn test_include_only_these_characters() {
        let allowed = ["a".to_string(), "b".to_string()];
        assert_eq!(include_only_these_characters("abcab", &allowed), "abab");
        assert_eq!(include_only_these_characters("xyz", &allowed), "");
        let none: [&str; 0] = [];
        assert_eq!(include_only_these_characters("abc", &none), "");
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim("  hi  "), "hi");
        assert_eq!(trim("no trim"), "no trim");
        assert_eq!(trim("\t tabs \n"), "tabs");
    }

    #[test]
    fn test_transforms_are_idempotent() {
        let s = " a1!é ツ2b@ ";
        assert_eq!(only_numbers(&only_numbers(s)), only_numbers(s));
        assert_eq!(only_letters(&only_letters(s)), only_letters(s));
        assert_eq!(
            only_special_characters(&only_special_characters(s)),
            only_special_characters(s)
        );
        assert_eq!(trim(&trim(s)), trim(s));
    }
}
