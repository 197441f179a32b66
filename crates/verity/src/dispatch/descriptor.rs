//! Wire types for bulk operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::llm::FieldJudgement;
use crate::probe::ProbeReport;

/// One named operation to apply, plus its non-subject arguments.
///
/// Arguments arrive as sibling JSON keys
/// (`{"operation": "isZipCode", "countryCode": "US"}`); each handler pulls
/// out the keys it declares and ignores the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// Registry name of the operation (`"isInteger"`, `"onlyNumbers"`, ...).
    pub operation: String,

    /// Remaining descriptor keys, interpreted per operation.
    #[serde(flatten)]
    pub args: Map<String, Value>,
}

impl OperationDescriptor {
    /// Descriptor with no arguments.
    pub fn named(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            args: Map::new(),
        }
    }

    /// Add one argument.
    pub fn with_arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.args.insert(name.into(), value);
        self
    }
}

/// One subject string plus the operations to run against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRecord {
    /// The string every operation in this record is applied to.
    pub subject_value: String,

    /// Operations, applied in order.
    #[serde(default)]
    pub operations: Vec<OperationDescriptor>,

    /// Request an AND reduction over the boolean-typed results.
    #[serde(default)]
    pub combine_with_and: bool,

    /// Request an OR reduction over the boolean-typed results.
    #[serde(default)]
    pub combine_with_or: bool,
}

/// Structured error produced in place of a result when an operation cannot
/// run (unknown name, bad argument, unconfigured capability).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationError {
    pub error: String,
}

/// Result of one operation applied to one subject value.
///
/// Untagged: booleans, transformed strings, probe reports, field judgements
/// and structured errors each serialize as their natural JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Bool(bool),
    Text(String),
    Probe(ProbeReport),
    Field(FieldJudgement),
    Error(OperationError),
}

impl Outcome {
    /// Structured error outcome.
    pub fn error(message: impl Into<String>) -> Self {
        Outcome::Error(OperationError {
            error: message.into(),
        })
    }

    /// The boolean value, if this outcome is boolean-typed.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Outcome::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this outcome is a structured error.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }
}

/// One outcome, labelled with the operation that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    pub operation_name: String,
    pub result: Outcome,
}

/// All outcomes for one value record, plus any requested aggregates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueResult {
    pub original_value: String,

    /// Outcomes in the order the operations were declared.
    pub results: Vec<OperationResult>,

    /// AND over the boolean-typed outcomes; present iff requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub and_result: Option<bool>,

    /// OR over the boolean-typed outcomes; present iff requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub or_result: Option<bool>,
}

/// Top-level bulk output, order-preserving relative to the input records.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub results: Vec<ValueResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_flattens_args() {
        let raw = json!({"operation": "isZipCode", "countryCode": "US"});
        let descriptor: OperationDescriptor = serde_json::from_value(raw).unwrap();
        assert_eq!(descriptor.operation, "isZipCode");
        assert_eq!(descriptor.args["countryCode"], json!("US"));
    }

    #[test]
    fn test_value_record_flags_default_false() {
        let raw = json!({"subjectValue": "abc", "operations": []});
        let record: ValueRecord = serde_json::from_value(raw).unwrap();
        assert!(!record.combine_with_and);
        assert!(!record.combine_with_or);
    }

    #[test]
    fn test_outcome_serialization_is_untagged() {
        assert_eq!(serde_json::to_value(Outcome::Bool(true)).unwrap(), json!(true));
        assert_eq!(
            serde_json::to_value(Outcome::Text("123".into())).unwrap(),
            json!("123")
        );
        assert_eq!(
            serde_json::to_value(Outcome::error("Unknown operation 'x'")).unwrap(),
            json!({"error": "Unknown operation 'x'"})
        );
    }

    #[test]
    fn test_value_result_omits_unrequested_aggregates() {
        let result = ValueResult {
            original_value: "abc".into(),
            results: vec![],
            and_result: None,
            or_result: Some(true),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("andResult").is_none());
        assert_eq!(value["orResult"], json!(true));
    }
}
