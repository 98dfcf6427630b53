//! Incremental assembly of a pipe and its least-privilege execution role.

use serde::Serialize;
use tracing::debug;

use pipestack_types::{
    Arn, EnrichmentHttpParameters, EnrichmentParameters, InlinePolicy, InvocationType, PipeError,
    PolicyDocument, PolicyStatement, SourceParameters, SqsQueueParameters, StateMachineParameters,
    TargetParameters,
};

use crate::errors::SynthError;
use crate::pipe::Pipe;
use crate::resources::{ApiDestination, Queue, Role, RoleProps, StateMachine};
use crate::stack::Stack;

/// The principal allowed to assume the pipe execution role.
pub const PIPES_SERVICE_PRINCIPAL: &str = "pipes.amazonaws.com";

/// Actions the pipe needs against its source queue.
pub const SOURCE_ACTIONS: [&str; 3] = [
    "sqs:ReceiveMessage",
    "sqs:DeleteMessage",
    "sqs:GetQueueAttributes",
];

/// Actions the pipe needs against its enrichment destination.
pub const ENRICHMENT_ACTIONS: [&str; 1] = ["events:InvokeApiDestination"];

/// Actions the pipe needs against its target state machine.
pub const TARGET_ACTIONS: [&str; 1] = ["states:StartExecution"];

const MAX_BATCH_SIZE: u32 = 10_000;
const MAX_BATCH_WINDOW_SECONDS: u32 = 300;

const EXECUTION_POLICY_NAME: &str = "PipeExecutionPolicy";

/// Accumulates source, enrichment, and target configuration for one pipe,
/// along with one permission statement per configured step.
///
/// `build` consumes the builder, declares the execution role with the
/// aggregated policy, and registers the pipe into the stack. Consuming
/// `self` is what makes the open/built transition one-way: there is no
/// adding a step to, or rebuilding, a pipe that has already been built.
#[derive(Debug)]
pub struct PipeBuilder<'a> {
    stack: &'a mut Stack,
    name: String,
    source: Option<(Arn, SqsQueueParameters)>,
    enrichment: Option<(Arn, EnrichmentHttpParameters)>,
    target: Option<(Arn, InvocationType)>,
    statements: Vec<PolicyStatement>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CfnPipeProps {
    role_arn: Arn,
    source: Arn,
    source_parameters: SourceParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    enrichment: Option<Arn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enrichment_parameters: Option<EnrichmentParameters>,
    target: Arn,
    target_parameters: TargetParameters,
}

impl<'a> PipeBuilder<'a> {
    pub fn new(stack: &'a mut Stack, name: impl Into<String>) -> Self {
        Self {
            stack,
            name: name.into(),
            source: None,
            enrichment: None,
            target: None,
            statements: Vec::new(),
        }
    }

    /// Poll `queue` as the pipe source.
    ///
    /// Appends a statement granting [`SOURCE_ACTIONS`] on the queue. A
    /// repeat call overwrites the source configuration but still appends
    /// its statement; the policy is append-only.
    ///
    /// # Errors
    ///
    /// Rejects a zero or oversized batch size and an oversized batching
    /// window at the call site.
    pub fn sqs_source(
        mut self,
        queue: &Queue,
        batch_size: u32,
        batch_window_seconds: u32,
    ) -> Result<Self, PipeError> {
        if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
            return Err(PipeError::InvalidParameter {
                pipe: self.name.clone(),
                parameter: "batch_size",
                reason: format!("must be between 1 and {MAX_BATCH_SIZE}, got {batch_size}"),
            });
        }
        if batch_window_seconds > MAX_BATCH_WINDOW_SECONDS {
            return Err(PipeError::InvalidParameter {
                pipe: self.name.clone(),
                parameter: "batch_window_seconds",
                reason: format!(
                    "must be at most {MAX_BATCH_WINDOW_SECONDS}, got {batch_window_seconds}"
                ),
            });
        }

        self.statements.push(PolicyStatement::allow(
            &SOURCE_ACTIONS,
            vec![queue.arn().clone()],
        ));
        self.source = Some((
            queue.arn().clone(),
            SqsQueueParameters {
                batch_size,
                maximum_batching_window_in_seconds: batch_window_seconds,
            },
        ));
        Ok(self)
    }

    /// Route each batch through `destination` before it reaches the target.
    ///
    /// Appends a statement granting [`ENRICHMENT_ACTIONS`] on the
    /// destination. A repeat call overwrites the enrichment configuration
    /// but still appends its statement.
    pub fn http_enrichment(
        mut self,
        destination: &ApiDestination,
        params: EnrichmentHttpParameters,
    ) -> Self {
        self.statements.push(PolicyStatement::allow(
            &ENRICHMENT_ACTIONS,
            vec![destination.arn().clone()],
        ));
        self.enrichment = Some((destination.arn().clone(), params));
        self
    }

    /// Deliver batches to `state_machine`.
    ///
    /// Appends a statement granting [`TARGET_ACTIONS`] on the machine. A
    /// repeat call overwrites the target configuration but still appends
    /// its statement.
    pub fn state_machine_target(
        mut self,
        state_machine: &StateMachine,
        invocation_type: InvocationType,
    ) -> Self {
        self.statements.push(PolicyStatement::allow(
            &TARGET_ACTIONS,
            vec![state_machine.arn().clone()],
        ));
        self.target = Some((state_machine.arn().clone(), invocation_type));
        self
    }

    /// Project the accumulated state into an execution role and a pipe.
    ///
    /// The role carries one inline policy holding every statement appended
    /// by the add-step calls, in call order, never deduplicated.
    ///
    /// # Errors
    ///
    /// Fails with [`PipeError::IncompleteConfiguration`] if either the
    /// source or the target was never set.
    pub fn build(self) -> Result<Pipe, SynthError> {
        let Self {
            stack,
            name,
            source,
            enrichment,
            target,
            statements,
        } = self;

        let (source_arn, sqs_parameters) =
            source.ok_or(PipeError::IncompleteConfiguration {
                pipe: name.clone(),
                missing: "source",
            })?;
        let (target_arn, invocation_type) =
            target.ok_or(PipeError::IncompleteConfiguration {
                pipe: name.clone(),
                missing: "target",
            })?;

        debug!(
            pipe = %name,
            statements = statements.len(),
            enriched = enrichment.is_some(),
            "building pipe"
        );

        let role = Role::new(
            stack,
            &format!("{name}Role"),
            RoleProps::for_service(
                PIPES_SERVICE_PRINCIPAL,
                vec![InlinePolicy {
                    policy_name: EXECUTION_POLICY_NAME.to_string(),
                    policy_document: PolicyDocument::new(statements),
                }],
            ),
        )?;

        let (enrichment, enrichment_parameters) = match enrichment {
            Some((arn, http_parameters)) => (
                Some(arn),
                Some(EnrichmentParameters { http_parameters }),
            ),
            None => (None, None),
        };

        let props = CfnPipeProps {
            role_arn: role.arn().clone(),
            source: source_arn,
            source_parameters: SourceParameters {
                sqs_queue_parameters: sqs_parameters,
            },
            enrichment,
            enrichment_parameters,
            target: target_arn,
            target_parameters: TargetParameters {
                step_function_state_machine_parameters: StateMachineParameters {
                    invocation_type,
                },
            },
        };
        stack.add_resource(&name, "AWS::Pipes::Pipe", &props)?;

        Ok(Pipe::new(Arn::get_att(&name, "Arn")))
    }
}
