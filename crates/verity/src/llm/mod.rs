//! LLM-backed generic field validation.
//!
//! The `isField` operation takes a field kind ("email", "phone number",
//! "date of birth", ...) and a candidate value, and asks a language model
//! whether the value is plausible for that kind of field. The model answers
//! with a boolean verdict and a short explanation.
//!
//! The integration is optional - every other catalog operation works without
//! a configured provider.
//!
//! # Supported Providers
//!
//! - **Gemini** - Google Generative Language API (requires `GEMINI_API_KEY`)
//! - **Mock** - deterministic canned judgements for tests

mod extract;
mod gemini;
mod mock;
mod prompts;
mod provider;

pub use extract::extract_json;
pub use gemini::GeminiProvider;
pub use mock::MockProvider;
pub use provider::{FieldJudgement, LlmConfig, LlmProvider};
