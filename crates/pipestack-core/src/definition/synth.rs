//! Projects a validated definition into a deployment template.

use anyhow::{bail, Context, Result};
use tracing::info;

use pipestack_types::Arn;

use crate::definition::types::PipelineDefinition;
use crate::definition::validator::validate_definition;
use crate::pipe::PipeBuilder;
use crate::resources::{
    ApiDestination, ApiDestinationProps, Connection, ConnectionProps, HttpMethod, Queue,
    QueueProps, StateMachine, StateMachineProps,
};
use crate::stack::Stack;
use crate::template::Template;

const SOURCE_QUEUE_ID: &str = "SourceSqsQueue";
const TARGET_MACHINE_ID: &str = "TargetStateMachine";
const CONNECTION_ID: &str = "EnrichmentConnection";
const API_DESTINATION_ID: &str = "EnrichmentApiDestination";
const PIPE_ID: &str = "EventPipe";

/// Synthesize a deployment template from a definition.
///
/// Validates first, then declares the queue / enrichment endpoint / state
/// machine as needed and wires them through a [`PipeBuilder`].
pub fn synthesize(definition: &PipelineDefinition) -> Result<Template> {
    validate_definition(definition)?;

    info!(stack = %definition.stack, "synthesizing template");
    let mut stack = Stack::new(&definition.stack).with_description(
        definition
            .description
            .clone()
            .unwrap_or_else(|| format!("Event pipe stack '{}'", definition.stack)),
    );

    let queue = match (&definition.source.arn, &definition.source.queue) {
        (Some(arn), None) => Queue::from_arn(Arn::literal(arn.clone())?),
        (None, Some(declared)) => Queue::new(
            &mut stack,
            SOURCE_QUEUE_ID,
            QueueProps {
                queue_name: declared.name.clone(),
                visibility_timeout: declared.visibility_timeout_seconds,
                message_retention_period: declared.message_retention_seconds,
            },
        )?,
        _ => bail!("Source must set exactly one of 'arn' or 'queue'"),
    };

    let destination = match &definition.enrichment {
        Some(enrichment) => {
            let connection = Connection::new(
                &mut stack,
                CONNECTION_ID,
                ConnectionProps {
                    name: None,
                    api_key_name: enrichment.auth.api_key_name.clone(),
                    api_key_value: enrichment.auth.api_key.clone(),
                },
            )?;
            Some(ApiDestination::new(
                &mut stack,
                API_DESTINATION_ID,
                &connection,
                ApiDestinationProps {
                    name: None,
                    invocation_endpoint: enrichment.endpoint.clone(),
                    http_method: HttpMethod::Post,
                    invocation_rate_limit_per_second: enrichment.rate_limit_per_second,
                },
            )?)
        }
        None => None,
    };

    let machine = match (&definition.target.arn, &definition.target.state_machine) {
        (Some(arn), None) => StateMachine::from_arn(Arn::literal(arn.clone())?),
        (None, Some(declared)) => {
            let asl = declared
                .definition
                .clone()
                .context("Declared state machine is missing its definition document")?;
            StateMachine::new(
                &mut stack,
                TARGET_MACHINE_ID,
                StateMachineProps {
                    state_machine_name: declared.name.clone(),
                    definition: asl,
                },
            )?
        }
        _ => bail!("Target must set exactly one of 'arn' or 'state_machine'"),
    };

    let mut builder = PipeBuilder::new(&mut stack, PIPE_ID).sqs_source(
        &queue,
        definition.source.batch_size,
        definition.source.batch_window_seconds,
    )?;
    if let Some(destination) = &destination {
        let params = definition
            .enrichment
            .as_ref()
            .map(|e| e.http.clone().into())
            .unwrap_or_default();
        builder = builder.http_enrichment(destination, params);
    }
    builder
        .state_machine_target(&machine, definition.target.invocation_type)
        .build()?;

    Ok(stack.template())
}
