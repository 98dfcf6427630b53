//! Resource declarations: each registers itself into a [`Stack`](crate::Stack)
//! and hands back an ARN-bearing handle, or wraps an existing resource
//! imported by literal ARN.

mod http;
mod queue;
mod role;
mod state_machine;

pub use http::{ApiDestination, ApiDestinationProps, Connection, ConnectionProps, HttpMethod};
pub use queue::{Queue, QueueProps};
pub use role::{Role, RoleProps};
pub use state_machine::{StateMachine, StateMachineProps};
