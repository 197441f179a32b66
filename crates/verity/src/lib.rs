//! Verity: string validation and transformation with safe dispatch-by-name.
//!
//! Verity provides a fixed catalog of pure string predicates and transforms
//! (email, phone, zip code, date, URL, ...), a pair of bounded network probes,
//! an LLM-backed generic field validator, and a bulk-operation engine that
//! applies any sequence of catalog operations to any sequence of values in a
//! single call.
//!
//! # Core Principles
//!
//! - **Total functions**: catalog entries never panic or error for string input
//! - **Safe dispatch**: operation names resolve through a static registry,
//!   never through constructed code
//! - **Errors as values**: unknown operations and network failures become
//!   structured results so a batch always runs to completion
//!
//! # Example
//!
//! ```
//! use verity::catalog;
//!
//! assert!(catalog::is_email_address("test@gmail.com"));
//! assert_eq!(catalog::only_numbers("a1b2c3"), "123");
//! ```

pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod llm;
pub mod probe;

pub use dispatch::{
    BatchResult, Engine, OperationDescriptor, OperationResult, Outcome, ValueRecord, ValueResult,
};
pub use error::{Result, VerityError};
pub use llm::{FieldJudgement, GeminiProvider, LlmConfig, LlmProvider, MockProvider};
pub use probe::{CountryLookup, FailureCategory, ProbeFailure, ProbeReport, UrlProbe};
