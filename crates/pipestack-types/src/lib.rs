//! Shared resource-reference, IAM policy, and pipe parameter types.
//!
//! This crate is the vocabulary boundary between the synthesis layer and
//! anything that consumes emitted templates; it carries no synthesis logic.

pub mod arn;
pub mod error;
pub mod iam;
pub mod pipe;

pub use arn::Arn;
pub use error::{ArnError, PipeError};
pub use iam::{Effect, InlinePolicy, PolicyDocument, PolicyStatement, Principal};
pub use pipe::{
    EnrichmentHttpParameters, EnrichmentParameters, InvocationType, SourceParameters,
    SqsQueueParameters, StateMachineParameters, TargetParameters,
};
