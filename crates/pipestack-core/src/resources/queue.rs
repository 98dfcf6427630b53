//! SQS queue declaration.

use serde::Serialize;

use pipestack_types::Arn;

use crate::errors::SynthError;
use crate::stack::Stack;

/// Properties for a declared queue. All optional; the provider fills in
/// defaults for anything omitted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueueProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<String>,
    /// Seconds a received message stays hidden from other consumers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_timeout: Option<u32>,
    /// Seconds a message is retained before the queue drops it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_retention_period: Option<u32>,
}

/// Handle to a queue usable as a pipe source.
#[derive(Debug, Clone)]
pub struct Queue {
    arn: Arn,
}

impl Queue {
    /// Declare a new queue in `stack`.
    pub fn new(stack: &mut Stack, logical_id: &str, props: QueueProps) -> Result<Self, SynthError> {
        stack.add_resource(logical_id, "AWS::SQS::Queue", &props)?;
        Ok(Self {
            arn: Arn::get_att(logical_id, "Arn"),
        })
    }

    /// Wrap an existing queue by ARN without declaring anything.
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
    fn test_declared_queue_registers_and_references() {
        let mut stack = Stack::new("pipes");
        let queue = Queue::new(
            &mut stack,
            "SourceSqsQueue",
            QueueProps {
                visibility_timeout: Some(300),
                ..QueueProps::default()
            },
        )
        .unwrap();

        assert_eq!(*queue.arn(), Arn::get_att("SourceSqsQueue", "Arn"));
        let template = stack.template();
        let resource = template.resource("SourceSqsQueue").unwrap();
        assert_eq!(resource.resource_type, "AWS::SQS::Queue");
        assert_eq!(resource.properties, json!({ "VisibilityTimeout": 300 }));
    }

    #[test]
    fn test_default_props_serialize_empty() {
        let value = serde_json::to_value(QueueProps::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_imported_queue_declares_nothing() {
        let arn = Arn::literal("arn:aws:sqs:eu-west-1:123456789012:jobs").unwrap();
        let queue = Queue::from_arn(arn.clone());
        assert_eq!(*queue.arn(), arn);
    }
}
