//! HTTP enrichment endpoint: an events connection plus an API destination.

use serde::Serialize;

use pipestack_types::Arn;

use crate::errors::SynthError;
use crate::stack::Stack;

/// HTTP method the pipe uses when invoking the destination.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
}

/// Properties for an events connection holding the endpoint credentials.
#[derive(Debug, Clone)]
pub struct ConnectionProps {
    pub name: Option<String>,
    pub api_key_name: String,
    pub api_key_value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CfnConnectionProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    authorization_type: &'static str,
    auth_parameters: AuthParameters,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AuthParameters {
    api_key_auth_parameters: ApiKeyAuthParameters,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ApiKeyAuthParameters {
    api_key_name: String,
    api_key_value: String,
}

/// Handle to a declared connection.
#[derive(Debug, Clone)]
pub struct Connection {
    arn: Arn,
}

impl Connection {
    pub fn new(
        stack: &mut Stack,
        logical_id: &str,
        props: ConnectionProps,
    ) -> Result<Self, SynthError> {
        let cfn = CfnConnectionProps {
            name: props.name,
            authorization_type: "API_KEY",
            auth_parameters: AuthParameters {
                api_key_auth_parameters: ApiKeyAuthParameters {
                    api_key_name: props.api_key_name,
                    api_key_value: props.api_key_value,
                },
            },
        };
        stack.add_resource(logical_id, "AWS::Events::Connection", &cfn)?;
        Ok(Self {
            arn: Arn::get_att(logical_id, "Arn"),
        })
    }

    pub fn arn(&self) -> &Arn {
        &self.arn
    }
}

/// Properties for the API destination itself.
#[derive(Debug, Clone)]
pub struct ApiDestinationProps {
    pub name: Option<String>,
    pub invocation_endpoint: String,
    pub http_method: HttpMethod,
    pub invocation_rate_limit_per_second: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CfnApiDestinationProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    connection_arn: Arn,
    invocation_endpoint: String,
    http_method: HttpMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    invocation_rate_limit_per_second: Option<u32>,
}

/// Handle to an API destination usable as a pipe enrichment step.
#[derive(Debug, Clone)]
pub struct ApiDestination {
    arn: Arn,
}

impl ApiDestination {
    /// Declare a destination bound to `connection`.
    pub fn new(
        stack: &mut Stack,
        logical_id: &str,
        connection: &Connection,
        props: ApiDestinationProps,
    ) -> Result<Self, SynthError> {
        let cfn = CfnApiDestinationProps {
            name: props.name,
            connection_arn: connection.arn().clone(),
            invocation_endpoint: props.invocation_endpoint,
            http_method: props.http_method,
            invocation_rate_limit_per_second: props.invocation_rate_limit_per_second,
        };
        stack.add_resource(logical_id, "AWS::Events::ApiDestination", &cfn)?;
        Ok(Self {
            arn: Arn::get_att(logical_id, "Arn"),
        })
    }

    /// Wrap an existing destination by ARN without declaring anything.
    pub fn from_arn(arn: Arn) -> Self {
        Self { arn }
    }

    pub fn arn(&self) -> &Arn {
        &self.arn
    }
}
