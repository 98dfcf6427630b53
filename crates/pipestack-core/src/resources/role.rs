//! IAM role declaration.

use serde::Serialize;

use pipestack_types::{Arn, InlinePolicy, PolicyDocument};

use crate::errors::SynthError;
use crate::stack::Stack;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoleProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    /// Trust policy: which principal may assume the role.
    pub assume_role_policy_document: PolicyDocument,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<InlinePolicy>,
}

impl RoleProps {
    /// A role assumable by `service` with the given inline policies.
    pub fn for_service(service: &str, policies: Vec<InlinePolicy>) -> Self {
        Self {
            role_name: None,
            assume_role_policy_document: PolicyDocument::service_assume_role(service),
            policies,
        }
    }
}

/// Handle to a declared role.
#[derive(Debug, Clone)]
pub struct Role {
    arn: Arn,
}

impl Role {
    pub fn new(stack: &mut Stack, logical_id: &str, props: RoleProps) -> Result<Self, SynthError> {
        stack.add_resource(logical_id, "AWS::IAM::Role", &props)?;
        Ok(Self {
            arn: Arn::get_att(logical_id, "Arn"),
        })
    }

    pub fn arn(&self) -> &Arn {
        &self.arn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipestack_types::PolicyStatement;

    #[test]
    fn test_role_registers_trust_policy() {
        let mut stack = Stack::new("pipes");
        let role = Role::new(
            &mut stack,
            "PipeRole",
            RoleProps::for_service("pipes.amazonaws.com", Vec::new()),
        )
        .unwrap();

        assert_eq!(*role.arn(), Arn::get_att("PipeRole", "Arn"));
        let template = stack.template();
        let props = &template.resource("PipeRole").unwrap().properties;
        assert_eq!(
            props["AssumeRolePolicyDocument"]["Statement"][0]["Principal"]["Service"],
            "pipes.amazonaws.com"
        );
        // No inline policies declared, none emitted.
        assert!(props.get("Policies").is_none());
    }

    #[test]
    fn test_inline_policies_emitted_in_order() {
        let queue = Arn::literal("arn:aws:sqs:eu-west-1:123456789012:jobs").unwrap();
        let mut stack = Stack::new("pipes");
        Role::new(
            &mut stack,
            "PipeRole",
            RoleProps::for_service(
                "pipes.amazonaws.com",
                vec![InlinePolicy {
                    policy_name: "PipeExecutionPolicy".to_string(),
                    policy_document: PolicyDocument::new(vec![PolicyStatement::allow(
                        &["sqs:ReceiveMessage"],
                        vec![queue],
                    )]),
                }],
            ),
        )
        .unwrap();

        let template = stack.template();
        let props = &template.resource("PipeRole").unwrap().properties;
        assert_eq!(props["Policies"][0]["PolicyName"], "PipeExecutionPolicy");
        assert_eq!(
            props["Policies"][0]["PolicyDocument"]["Statement"][0]["Action"][0],
            "sqs:ReceiveMessage"
        );
    }
}
