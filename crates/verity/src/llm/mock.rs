//! Mock LLM provider for testing.

use crate::catalog;
use crate::error::Result;

use super::provider::{FieldJudgement, LlmProvider};

/// Mock provider that returns predictable judgements for testing.
///
/// For a handful of well-known field kinds it answers with the matching
/// catalog predicate; anything else gets a non-committal `true`.
pub struct MockProvider;

impl MockProvider {
    /// Create a new mock provider.
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for MockProvider {
    fn validate_field(&self, field: &str, value: &str) -> Result<FieldJudgement> {
        let normalized = field.to_lowercase();
        let result = match normalized.as_str() {
            "email" | "email address" => catalog::is_email_address(value),
            "phone" | "phone number" => catalog::is_phone_number(value),
            "url" => catalog::is_url(value),
            "date" => catalog::is_date(value),
            "integer" => catalog::is_integer(value),
            "boolean" => catalog::is_boolean(value),
            _ => true,
        };
        Ok(FieldJudgement {
            result,
            explanation: format!(
                "Mock judgement: '{}' {} a plausible value for field '{}'.",
                value,
                if result { "is" } else { "is not" },
                field
            ),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_recognizes_email_field() {
        let provider = MockProvider::new();
        let good = provider.validate_field("email", "test@gmail.com").unwrap();
        assert!(good.result);
        let bad = provider.validate_field("email", "plainaddress").unwrap();
        assert!(!bad.result);
        assert!(bad.explanation.contains("plainaddress"));
    }

    #[test]
    fn test_mock_defaults_to_true_for_unknown_fields() {
        let provider = MockProvider::new();
        let judgement = provider.validate_field("favorite color", "teal").unwrap();
        assert!(judgement.result);
    }
}
