//! IAM policy document model, serialized in CloudFormation's shape.

use serde::{Deserialize, Serialize};

use crate::arn::Arn;

pub const POLICY_VERSION: &str = "2012-10-17";

/// Statement effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Effect {
    Allow,
    Deny,
}

/// The principal a trust-policy statement applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    /// Service principal, e.g. `pipes.amazonaws.com`.
    #[serde(rename = "Service")]
    pub service: String,
}

/// One permission statement. Immutable once appended to a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub effect: Effect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
    pub action: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource: Vec<Arn>,
}

impl PolicyStatement {
    /// An `Allow` statement granting `actions` on `resources`.
    pub fn allow(actions: &[&str], resources: Vec<Arn>) -> Self {
        Self {
            effect: Effect::Allow,
            principal: None,
            action: actions.iter().map(|a| (*a).to_string()).collect(),
            resource: resources,
        }
    }
}

/// An ordered list of statements under one policy version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

impl PolicyDocument {
    pub fn new(statements: Vec<PolicyStatement>) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: statements,
        }
    }

    /// Trust policy allowing `service` to assume the role.
    pub fn service_assume_role(service: &str) -> Self {
        Self::new(vec![PolicyStatement {
            effect: Effect::Allow,
            principal: Some(Principal {
                service: service.to_string(),
            }),
            action: vec!["sts:AssumeRole".to_string()],
            resource: Vec::new(),
        }])
    }

    pub fn statement_count(&self) -> usize {
        self.statement.len()
    }
}

/// A named policy attached inline to a role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct InlinePolicy {
    pub policy_name: String,
    pub policy_document: PolicyDocument,
}
