//! Resource references: literal ARNs and deploy-time intrinsics.

use serde::{Deserialize, Serialize};

use crate::error::ArnError;

/// A reference to a cloud resource.
///
/// Either a literal ARN string (an existing resource imported into the
/// stack) or a deploy-time reference to a resource declared in the same
/// template, serialized as the provider's `Ref` / `Fn::GetAtt` intrinsic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Arn {
    /// Literal identifier, e.g. `arn:aws:sqs:eu-west-1:123456789012:jobs`.
    Literal(String),
    /// `{"Ref": "<logical id>"}` — for resource types whose `Ref` yields
    /// the ARN (state machines).
    Ref {
        #[serde(rename = "Ref")]
        logical_id: String,
    },
    /// `{"Fn::GetAtt": ["<logical id>", "<attribute>"]}`.
    GetAtt {
        #[serde(rename = "Fn::GetAtt")]
        parts: [String; 2],
    },
}

impl Arn {
    /// Parse a literal ARN, rejecting strings that are not in
    /// `arn:partition:service:region:account:resource` form.
    pub fn literal(value: impl Into<String>) -> Result<Self, ArnError> {
        let value = value.into();
        if !value.starts_with("arn:") {
            return Err(ArnError::MissingPrefix(value));
        }
        // Resource part may itself contain ':', so only the leading five
        // separators are structural.
        if value.splitn(6, ':').count() != 6 {
            return Err(ArnError::MalformedComponents(value));
        }
        Ok(Self::Literal(value))
    }

    /// Reference a declared resource by logical id (`Ref` intrinsic).
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Self::Ref {
            logical_id: logical_id.into(),
        }
    }

    /// Reference an attribute of a declared resource (`Fn::GetAtt`).
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::GetAtt {
            parts: [logical_id.into(), attribute.into()],
        }
    }

    /// The service component of a literal ARN, if this is one.
    pub fn service(&self) -> Option<&str> {
        match self {
            Self::Literal(value) => value.split(':').nth(2),
            _ => None,
        }
    }
}

impl std::fmt::Display for Arn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => f.write_str(value),
            Self::Ref { logical_id } => write!(f, "!Ref {logical_id}"),
            Self::GetAtt { parts } => write!(f, "!GetAtt {}.{}", parts[0], parts[1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_arn_parses() {
        let arn = Arn::literal("arn:aws:sqs:eu-west-1:123456789012:jobs").unwrap();
        assert_eq!(arn.service(), Some("sqs"));
    }

    #[test]
    fn test_literal_arn_allows_colons_in_resource() {
        let arn = Arn::literal("arn:aws:states:us-east-1:123456789012:stateMachine:orders");
        assert!(arn.is_ok());
    }

    #[test]
    fn test_missing_prefix_rejected() {
        let err = Arn::literal("https://sqs.eu-west-1.amazonaws.com/jobs").unwrap_err();
        assert!(err.to_string().contains("arn:"), "got: {err}");
    }

    #[test]
    fn test_truncated_arn_rejected() {
        assert!(Arn::literal("arn:aws:sqs").is_err());
    }

    #[test]
    fn test_literal_serializes_as_string() {
        let arn = Arn::literal("arn:aws:sqs:eu-west-1:123456789012:jobs").unwrap();
        let value = serde_json::to_value(&arn).unwrap();
        assert_eq!(value, json!("arn:aws:sqs:eu-west-1:123456789012:jobs"));
    }

    #[test]
    fn test_get_att_serializes_as_intrinsic() {
        let arn = Arn::get_att("SourceSqsQueue", "Arn");
        let value = serde_json::to_value(&arn).unwrap();
        assert_eq!(value, json!({ "Fn::GetAtt": ["SourceSqsQueue", "Arn"] }));
    }

    #[test]
    fn test_ref_serializes_as_intrinsic() {
        let arn = Arn::reference("TargetStateMachine");
        let value = serde_json::to_value(&arn).unwrap();
        assert_eq!(value, json!({ "Ref": "TargetStateMachine" }));
    }

    #[test]
    fn test_intrinsic_roundtrip() {
        let arn = Arn::get_att("PipeRole", "Arn");
        let json = serde_json::to_string(&arn).unwrap();
        let back: Arn = serde_json::from_str(&json).unwrap();
        assert_eq!(arn, back);
    }
}
