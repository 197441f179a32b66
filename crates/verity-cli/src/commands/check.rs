//! Check command - run one operation against one value.

use colored::Colorize;
use serde_json::Value;
use verity::{Engine, OperationDescriptor, Outcome};

pub fn run(
    operation: String,
    value: String,
    args: Vec<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut descriptor = OperationDescriptor::named(&operation);
    for pair in &args {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| format!("Argument '{}' is not in key=value form", pair))?;
        // "true"/"false" become booleans, anything else stays a string.
        let parsed = match raw {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            other => Value::String(other.to_string()),
        };
        descriptor = descriptor.with_arg(key, parsed);
    }

    let engine = Engine::new()?;
    let outcome = engine.apply(&value, &descriptor);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match &outcome {
        Outcome::Bool(true) => println!("{} {} -> true", operation.cyan(), value),
        Outcome::Bool(false) => println!("{} {} -> false", operation.cyan(), value),
        Outcome::Text(text) => println!("{} {} -> \"{}\"", operation.cyan(), value, text),
        Outcome::Probe(report) => {
            println!("{} {} -> {}", operation.cyan(), value, serde_json::to_string(report)?)
        }
        Outcome::Field(judgement) => {
            println!(
                "{} {} -> {} ({})",
                operation.cyan(),
                value,
                judgement.result,
                judgement.explanation
            )
        }
        Outcome::Error(err) => {
            return Err(err.error.clone().into());
        }
    }

    Ok(())
}
