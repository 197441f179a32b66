//! Ops command - list the operation registry.

use colored::Colorize;
use verity::dispatch::operation_names;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let names = operation_names();

    if json_output {
        let listing = serde_json::json!({ "operations": names });
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        println!("{} ({})", "Registered operations".cyan().bold(), names.len());
        for name in names {
            println!("  {}", name);
        }
    }

    Ok(())
}
