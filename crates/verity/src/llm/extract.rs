//! JSON extraction from free-form model output.

use once_cell::sync::Lazy;
use regex::Regex;

// Widest {...} span, dot matches newline. Models wrap JSON in prose or
// markdown fences often enough that strict parsing is not an option.
static JSON_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Pull the first JSON object out of `text`, ignoring any surrounding prose
/// or markdown fencing. Returns `None` when no `{...}` span is present.
pub fn extract_json(text: &str) -> Option<&str> {
    JSON_SPAN.find(text).map(|m| m.as_str())
}
