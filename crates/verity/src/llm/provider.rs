//! LLM provider trait and types.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The model's verdict on a field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldJudgement {
    /// Whether the value is plausible for the named field kind.
    pub result: bool,

    /// How the model arrived at that verdict.
    pub explanation: String,
}

/// Configuration for LLM providers.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model to use (e.g., "gemini-1.5-flash").
    pub model: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            max_tokens: 1024,
            temperature: 0.2,
        }
    }
}

/// Trait for LLM providers.
///
/// Implementations must be thread-safe (Send + Sync) so one provider can be
/// shared across request handlers and batch evaluations.
pub trait LlmProvider: Send + Sync {
    /// Judge whether `value` is a valid instance of the field kind `field`.
    ///
    /// # Errors
    /// Returns an error only for genuine service failures (network, auth,
    /// unparseable response). "The value is invalid" is a successful
    /// judgement with `result == false`, never an error.
    fn validate_field(&self, field: &str, value: &str) -> Result<FieldJudgement>;

    /// Human-readable provider name (for display and logs).
    fn name(&self) -> &'static str;
}
