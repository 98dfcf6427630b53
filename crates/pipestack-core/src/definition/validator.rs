//! Semantic validation for parsed definition values.

use anyhow::{bail, Result};
use pipestack_types::Arn;

use crate::definition::types::PipelineDefinition;

const SUPPORTED_VERSION: &str = "1.0";
const MAX_BATCH_SIZE: u32 = 10_000;
const MAX_BATCH_WINDOW_SECONDS: u32 = 300;

/// Validate a parsed definition.
/// Returns Ok(()) if valid, Err with all validation errors if not.
pub fn validate_definition(definition: &PipelineDefinition) -> Result<()> {
    let mut errors = Vec::new();

    if definition.version != SUPPORTED_VERSION {
        errors.push(format!(
            "Unsupported definition version '{}', expected '{}'",
            definition.version, SUPPORTED_VERSION
        ));
    }

    if definition.stack.trim().is_empty() {
        errors.push("Stack name must not be empty".to_string());
    }

    match (&definition.source.arn, &definition.source.queue) {
        (Some(_), Some(_)) => {
            errors.push("Source must set either 'arn' or 'queue', not both".to_string());
        }
        (None, None) => {
            errors.push("Source must set one of 'arn' or 'queue'".to_string());
        }
        (Some(arn), None) => {
            if let Err(e) = Arn::literal(arn.clone()) {
                errors.push(format!("Source arn is invalid: {e}"));
            }
        }
        (None, Some(_)) => {}
    }

    if definition.source.batch_size == 0 || definition.source.batch_size > MAX_BATCH_SIZE {
        errors.push(format!(
            "Source batch_size must be between 1 and {}, got {}",
            MAX_BATCH_SIZE, definition.source.batch_size
        ));
    }

    if definition.source.batch_window_seconds > MAX_BATCH_WINDOW_SECONDS {
        errors.push(format!(
            "Source batch_window_seconds must be at most {}, got {}",
            MAX_BATCH_WINDOW_SECONDS, definition.source.batch_window_seconds
        ));
    }

    if let Some(enrichment) = &definition.enrichment {
        if !enrichment.endpoint.starts_with("https://") {
            errors.push(format!(
                "Enrichment endpoint must be an https:// URL, got '{}'",
                enrichment.endpoint
            ));
        }
        if enrichment.auth.api_key_name.trim().is_empty() {
            errors.push("Enrichment auth api_key_name must not be empty".to_string());
        }
        if enrichment.auth.api_key.trim().is_empty() {
            errors.push("Enrichment auth api_key must not be empty".to_string());
        }
    }

    match (&definition.target.arn, &definition.target.state_machine) {
        (Some(_), Some(_)) => {
            errors.push("Target must set either 'arn' or 'state_machine', not both".to_string());
        }
        (None, None) => {
            errors.push("Target must set one of 'arn' or 'state_machine'".to_string());
        }
        (Some(arn), None) => {
            if let Err(e) = Arn::literal(arn.clone()) {
                errors.push(format!("Target arn is invalid: {e}"));
            }
        }
        (None, Some(machine)) => {
            if machine.definition.is_none() {
                errors.push(
                    "Declared target state_machine requires a 'definition' document".to_string(),
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        bail!(
            "Definition validation failed:\n  - {}",
            errors.join("\n  - ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::parser::parse_definition_str;

    fn valid_yaml() -> &'static str {
        r#"
version: "1.0"
stack: sqs-to-stepfunctions
source:
  queue:
    name: source-queue
  batch_size: 5
  batch_window_seconds: 10
target:
  state_machine:
    name: PipesTargetStateMachine
    definition:
      StartAt: Done
      States:
        Done:
          Type: Succeed
"#
    }

    #[test]
    fn test_valid_definition_passes() {
        let definition = parse_definition_str(valid_yaml()).unwrap();
        assert!(validate_definition(&definition).is_ok());
    }

    #[test]
    fn test_wrong_version_fails() {
        let yaml = valid_yaml().replace("\"1.0\"", "\"2.0\"");
        let definition = parse_definition_str(&yaml).unwrap();
        let err = validate_definition(&definition).unwrap_err().to_string();
        assert!(err.contains("Unsupported definition version"));
    }

    #[test]
    fn test_empty_stack_name_fails() {
        let yaml = valid_yaml().replace("sqs-to-stepfunctions", "\"\"");
        let definition = parse_definition_str(&yaml).unwrap();
        let err = validate_definition(&definition).unwrap_err().to_string();
        assert!(err.contains("Stack name must not be empty"));
    }

    #[test]
    fn test_source_without_arn_or_queue_fails() {
        let yaml = r#"
version: "1.0"
stack: pipes
source:
  batch_size: 5
target:
  arn: arn:aws:states:eu-west-1:123456789012:stateMachine:orders
"#;
        let definition = parse_definition_str(yaml).unwrap();
        let err = validate_definition(&definition).unwrap_err().to_string();
        assert!(err.contains("one of 'arn' or 'queue'"));
    }

    #[test]
    fn test_source_with_both_arn_and_queue_fails() {
        let yaml = r#"
version: "1.0"
stack: pipes
source:
  arn: arn:aws:sqs:eu-west-1:123456789012:jobs
  queue:
    name: also-declared
target:
  arn: arn:aws:states:eu-west-1:123456789012:stateMachine:orders
"#;
        let definition = parse_definition_str(yaml).unwrap();
        let err = validate_definition(&definition).unwrap_err().to_string();
        assert!(err.contains("not both"));
    }

    #[test]
    fn test_malformed_source_arn_fails() {
        let yaml = r#"
version: "1.0"
stack: pipes
source:
  arn: https://sqs.eu-west-1.amazonaws.com/jobs
target:
  arn: arn:aws:states:eu-west-1:123456789012:stateMachine:orders
"#;
        let definition = parse_definition_str(yaml).unwrap();
        let err = validate_definition(&definition).unwrap_err().to_string();
        assert!(err.contains("Source arn is invalid"));
    }

    #[test]
    fn test_zero_batch_size_fails() {
        let yaml = valid_yaml().replace("batch_size: 5", "batch_size: 0");
        let definition = parse_definition_str(&yaml).unwrap();
        let err = validate_definition(&definition).unwrap_err().to_string();
        assert!(err.contains("batch_size must be between 1 and"));
    }

    #[test]
    fn test_oversized_batch_window_fails() {
        let yaml = valid_yaml().replace("batch_window_seconds: 10", "batch_window_seconds: 301");
        let definition = parse_definition_str(&yaml).unwrap();
        let err = validate_definition(&definition).unwrap_err().to_string();
        assert!(err.contains("batch_window_seconds must be at most"));
    }

    #[test]
    fn test_plain_http_enrichment_endpoint_fails() {
        let yaml = format!(
            "{}{}",
            valid_yaml(),
            r#"enrichment:
  endpoint: http://api.example.com/enrich
  auth:
    api_key_name: x-api-key
    api_key: s3cr3t
"#
        );
        let definition = parse_definition_str(&yaml).unwrap();
        let err = validate_definition(&definition).unwrap_err().to_string();
        assert!(err.contains("https://"));
    }

    #[test]
    fn test_declared_machine_without_definition_fails() {
        let yaml = r#"
version: "1.0"
stack: pipes
source:
  queue: {}
target:
  state_machine:
    name: orders
"#;
        let definition = parse_definition_str(yaml).unwrap();
        let err = validate_definition(&definition).unwrap_err().to_string();
        assert!(err.contains("requires a 'definition' document"));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let yaml = r#"
version: "2.0"
stack: ""
source:
  batch_size: 0
target:
  state_machine:
    name: orders
"#;
        let definition = parse_definition_str(yaml).unwrap();
        let err = validate_definition(&definition).unwrap_err().to_string();
        assert!(err.contains("Unsupported definition version"));
        assert!(err.contains("Stack name must not be empty"));
        assert!(err.contains("batch_size"));
        assert!(err.contains("requires a 'definition' document"));
    }
}
