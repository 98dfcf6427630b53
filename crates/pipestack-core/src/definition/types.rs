use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pipestack_types::{EnrichmentHttpParameters, InvocationType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDefinition {
    pub version: String,
    /// Stack name; also used for the template description when no
    /// explicit description is given.
    pub stack: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: SourceDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<EnrichmentDefinition>,
    pub target: TargetDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDefinition {
    /// Existing queue, by ARN. Mutually exclusive with `queue`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Queue to declare in this stack. Mutually exclusive with `arn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<QueueDefinition>,
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
    #[serde(default = "default_batch_window")]
    pub batch_window_seconds: u32,
}

fn default_batch_size() -> u32 {
    5
}
fn default_batch_window() -> u32 {
    10
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_timeout_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_retention_seconds: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentDefinition {
    /// HTTPS endpoint the pipe invokes between source and target.
    pub endpoint: String,
    pub auth: ApiKeyAuthDefinition,
    #[serde(default)]
    pub http: HttpParametersDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_second: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyAuthDefinition {
    pub api_key_name: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpParametersDefinition {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub header_parameters: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub query_string_parameters: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_parameter_values: Vec<String>,
}

impl From<HttpParametersDefinition> for EnrichmentHttpParameters {
    fn from(def: HttpParametersDefinition) -> Self {
        Self {
            header_parameters: def.header_parameters,
            query_string_parameters: def.query_string_parameters,
            path_parameter_values: def.path_parameter_values,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDefinition {
    /// Existing state machine, by ARN. Mutually exclusive with
    /// `state_machine`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// State machine to declare in this stack. Mutually exclusive with
    /// `arn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_machine: Option<StateMachineDefinition>,
    #[serde(default)]
    pub invocation_type: InvocationType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateMachineDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// States-language definition document. Required when declaring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<serde_json::Value>,
}
