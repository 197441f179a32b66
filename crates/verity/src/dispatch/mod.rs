//! Dispatch-by-name and bulk aggregation.
//!
//! A caller supplies value records - a subject string plus an ordered list
//! of named operations - and gets back one outcome per operation plus
//! optional AND/OR reductions over the boolean outcomes. Names resolve
//! through the static [`registry`]; unknown names and bad arguments become
//! structured error outcomes so the rest of the batch always runs.

mod descriptor;
mod engine;
pub mod registry;

pub use descriptor::{
    BatchResult, OperationDescriptor, OperationError, OperationResult, Outcome, ValueRecord,
    ValueResult,
};
pub use engine::Engine;
pub use registry::{operation_names, ArgError};
