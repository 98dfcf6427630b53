use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use pipestack_core::definition::{parser, synth, validator};

/// Execute the `synth` command: parse, validate, and emit the template.
pub fn execute(definition_path: &Path, output: Option<&Path>) -> Result<()> {
    let definition = parser::parse_definition(definition_path)
        .with_context(|| format!("Failed to parse definition: {}", definition_path.display()))?;
    validator::validate_definition(&definition)?;

    let template = synth::synthesize(&definition)?;
    let json = template
        .to_json_pretty()
        .context("Failed to render template JSON")?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write template: {}", path.display()))?;
            info!(resources = template.resource_count(), "template written");
            println!("Template written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
