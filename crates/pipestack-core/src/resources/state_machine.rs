//! Step Functions state machine declaration.

use serde::Serialize;

use pipestack_types::Arn;

use crate::errors::SynthError;
use crate::resources::role::{Role, RoleProps};
use crate::stack::Stack;

pub const STATES_SERVICE_PRINCIPAL: &str = "states.amazonaws.com";

#[derive(Debug, Clone)]
pub struct StateMachineProps {
    pub state_machine_name: Option<String>,
    /// Opaque states-language definition document.
    pub definition: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CfnStateMachineProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    state_machine_name: Option<String>,
    definition_string: String,
    role_arn: Arn,
}

/// Handle to a state machine usable as a pipe target.
#[derive(Debug, Clone)]
pub struct StateMachine {
    arn: Arn,
}

impl StateMachine {
    /// Declare a new state machine in `stack`.
    ///
    /// Also declares the `<logical_id>Role` execution role the provider
    /// requires; the demo definitions here need no permissions beyond the
    /// trust policy.
    pub fn new(
        stack: &mut Stack,
        logical_id: &str,
        props: StateMachineProps,
    ) -> Result<Self, SynthError> {
        let role = Role::new(
            stack,
            &format!("{logical_id}Role"),
            RoleProps::for_service(STATES_SERVICE_PRINCIPAL, Vec::new()),
        )?;

        let cfn = CfnStateMachineProps {
            state_machine_name: props.state_machine_name,
            definition_string: serde_json::to_string(&props.definition)?,
            role_arn: role.arn().clone(),
        };
        stack.add_resource(logical_id, "AWS::StepFunctions::StateMachine", &cfn)?;

        // Ref on a state machine yields its ARN.
        Ok(Self {
            arn: Arn::reference(logical_id),
        })
    }

    /// Wrap an existing state machine by ARN without declaring anything.
    pub fn from_arn(arn: Arn) -> Self {
        Self { arn }
    }

    pub fn arn(&self) -> &Arn {
        &self.arn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_declares_machine_and_execution_role() {
        let mut stack = Stack::new("pipes");
        let machine = StateMachine::new(
            &mut stack,
            "TargetStateMachine",
            StateMachineProps {
                state_machine_name: Some("PipesTargetStateMachine".to_string()),
                definition: json!({ "StartAt": "Done", "States": { "Done": { "Type": "Succeed" } } }),
            },
        )
        .unwrap();

        assert_eq!(*machine.arn(), Arn::reference("TargetStateMachine"));

        let template = stack.template();
        assert_eq!(template.resource_count(), 2);
        let role = template.resource("TargetStateMachineRole").unwrap();
        assert_eq!(role.resource_type, "AWS::IAM::Role");
        assert_eq!(
            role.properties["AssumeRolePolicyDocument"]["Statement"][0]["Principal"]["Service"],
            STATES_SERVICE_PRINCIPAL
        );

        let machine = template.resource("TargetStateMachine").unwrap();
        assert_eq!(machine.resource_type, "AWS::StepFunctions::StateMachine");
        assert_eq!(
            machine.properties["StateMachineName"],
            "PipesTargetStateMachine"
        );
        assert_eq!(
            machine.properties["RoleArn"],
            json!({ "Fn::GetAtt": ["TargetStateMachineRole", "Arn"] })
        );
    }

    #[test]
    fn test_definition_embeds_as_string() {
        let mut stack = Stack::new("pipes");
        StateMachine::new(
            &mut stack,
            "TargetStateMachine",
            StateMachineProps {
                state_machine_name: None,
                definition: json!({ "StartAt": "Wait5", "States": {} }),
            },
        )
        .unwrap();

        let template = stack.template();
        let definition = &template.resource("TargetStateMachine").unwrap().properties
            ["DefinitionString"];
        let embedded: serde_json::Value =
            serde_json::from_str(definition.as_str().unwrap()).unwrap();
        assert_eq!(embedded["StartAt"], "Wait5");
    }
}
