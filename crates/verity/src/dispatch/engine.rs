//! Bulk-operation evaluation.

use std::sync::Arc;

use crate::error::Result;
use crate::llm::LlmProvider;
use crate::probe::{CountryLookup, ProbeReport, UrlProbe};

use super::descriptor::{
    BatchResult, OperationDescriptor, OperationResult, Outcome, ValueRecord, ValueResult,
};
use super::registry::{self, Entry, ExternalOp, OperationArgs};

/// Evaluates batches of value records against the operation registry.
///
/// The engine owns the external collaborators (URL probe, country lookup,
/// optional LLM provider); pure catalog operations need none of them. No
/// state is shared between value records, so records are independent: the
/// output order is the input order regardless of how evaluation is
/// scheduled.
pub struct Engine {
    probe: UrlProbe,
    country: CountryLookup,
    llm: Option<Arc<dyn LlmProvider>>,
}

impl Engine {
    /// Create an engine with default probes and no LLM provider.
    pub fn new() -> Result<Self> {
        Ok(Self {
            probe: UrlProbe::new()?,
            country: CountryLookup::new()?,
            llm: None,
        })
    }

    /// Attach an LLM provider, enabling the `isField` operation.
    pub fn with_llm(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.llm = Some(provider);
        self
    }

    /// Whether an LLM provider is configured.
    pub fn has_llm(&self) -> bool {
        self.llm.is_some()
    }

    /// The configured provider, if any.
    pub fn llm(&self) -> Option<&Arc<dyn LlmProvider>> {
        self.llm.as_ref()
    }

    /// The URL reachability probe.
    pub fn probe(&self) -> &UrlProbe {
        &self.probe
    }

    /// The country lookup client.
    pub fn country(&self) -> &CountryLookup {
        &self.country
    }

    /// Evaluate a batch of value records.
    ///
    /// Every operation of every record runs; failures (unknown names, bad
    /// arguments, probe failures) become structured outcomes in place.
    ///
    /// Aggregation policy: `andResult`/`orResult` reduce over the
    /// boolean-typed outcomes only - transform strings, probe reports, field
    /// judgements and error outcomes do not participate. AND over zero
    /// booleans is `true` (vacuous); OR is `false`.
    pub fn evaluate(&self, records: &[ValueRecord]) -> BatchResult {
        BatchResult {
            results: records.iter().map(|r| self.evaluate_record(r)).collect(),
        }
    }

    fn evaluate_record(&self, record: &ValueRecord) -> ValueResult {
        let results: Vec<OperationResult> = record
            .operations
            .iter()
            .map(|descriptor| OperationResult {
                operation_name: descriptor.operation.clone(),
                result: self.apply(&record.subject_value, descriptor),
            })
            .collect();

        let booleans = || results.iter().filter_map(|r| r.result.as_bool());
        let and_result = record.combine_with_and.then(|| booleans().all(|b| b));
        let or_result = record.combine_with_or.then(|| booleans().any(|b| b));

        ValueResult {
            original_value: record.subject_value.clone(),
            results,
            and_result,
            or_result,
        }
    }

    /// Apply one operation to one subject value.
    pub fn apply(&self, subject: &str, descriptor: &OperationDescriptor) -> Outcome {
        let Some(entry) = registry::resolve(&descriptor.operation) else {
            return Outcome::error(format!("Unknown operation '{}'", descriptor.operation));
        };
        let args = OperationArgs::new(&descriptor.args);

        match entry {
            Entry::Pure(handler) => {
                handler(subject, &args).unwrap_or_else(|e| Outcome::error(e.to_string()))
            }
            Entry::External(ExternalOp::UrlReachable) => Outcome::Probe(self.probe.check(subject)),
            Entry::External(ExternalOp::Country) => match self.country.lookup(subject) {
                Ok(found) => Outcome::Bool(found),
                Err(failure) => Outcome::Probe(ProbeReport::Failed(failure)),
            },
            Entry::External(ExternalOp::Field) => {
                let field = match args.str_arg("fieldToValidate") {
                    Ok(field) => field,
                    Err(e) => return Outcome::error(e.to_string()),
                };
                match &self.llm {
                    Some(provider) => match provider.validate_field(field, subject) {
                        Ok(judgement) => Outcome::Field(judgement),
                        Err(e) => Outcome::error(format!("Field validation failed: {}", e)),
                    },
                    None => Outcome::error("LLM not configured. Set GEMINI_API_KEY to enable isField."),
                }
            }
        }
    }
}
