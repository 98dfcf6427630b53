use std::path::Path;

use anyhow::{Context, Result};

use pipestack_core::definition::{parser, validator};

/// Execute the `validate` command: check definition structure and semantics.
pub fn execute(definition_path: &Path) -> Result<()> {
    let definition = parser::parse_definition(definition_path)
        .with_context(|| format!("Failed to parse definition: {}", definition_path.display()))?;
    println!("Definition structure: OK");

    validator::validate_definition(&definition)?;
    println!("Definition semantics: OK");

    let source = match (&definition.source.arn, &definition.source.queue) {
        (Some(arn), _) => format!("existing queue {arn}"),
        _ => "declared queue".to_string(),
    };
    let target = match (&definition.target.arn, &definition.target.state_machine) {
        (Some(arn), _) => format!("existing state machine {arn}"),
        _ => "declared state machine".to_string(),
    };
    println!(
        "{:18} {} (batch size {}, window {}s)",
        "Source:", source, definition.source.batch_size, definition.source.batch_window_seconds
    );
    println!(
        "{:18} {}",
        "Enrichment:",
        match &definition.enrichment {
            Some(e) => e.endpoint.as_str(),
            None => "none",
        }
    );
    println!("{:18} {}", "Target:", target);

    println!("\nAll checks passed.");
    Ok(())
}
