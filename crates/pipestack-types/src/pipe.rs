//! Pipe parameter types, serialized in the shape `AWS::Pipes::Pipe` expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How the pipe invokes its target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvocationType {
    /// Start the execution and do not wait for it to finish.
    #[default]
    #[serde(alias = "fire_and_forget")]
    FireAndForget,
    /// Wait for the execution to complete (express workflows only).
    #[serde(alias = "request_response")]
    RequestResponse,
}

/// Polling behavior for an SQS source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SqsQueueParameters {
    pub batch_size: u32,
    pub maximum_batching_window_in_seconds: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SourceParameters {
    pub sqs_queue_parameters: SqsQueueParameters,
}

/// HTTP invocation parameters for an API-destination enrichment step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnrichmentHttpParameters {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub header_parameters: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub query_string_parameters: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_parameter_values: Vec<String>,
}

impl EnrichmentHttpParameters {
    pub fn is_empty(&self) -> bool {
        self.header_parameters.is_empty()
            && self.query_string_parameters.is_empty()
            && self.path_parameter_values.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EnrichmentParameters {
    pub http_parameters: EnrichmentHttpParameters,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StateMachineParameters {
    pub invocation_type: InvocationType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TargetParameters {
    pub step_function_state_machine_parameters: StateMachineParameters,
}
