//! Pipe wiring: the builder and the declared pipe handle.

mod builder;

pub use builder::{
    PipeBuilder, ENRICHMENT_ACTIONS, PIPES_SERVICE_PRINCIPAL, SOURCE_ACTIONS, TARGET_ACTIONS,
};

use pipestack_types::Arn;

/// Handle to a declared pipe.
#[derive(Debug, Clone)]
pub struct Pipe {
    arn: Arn,
}

impl Pipe {
    pub(crate) fn new(arn: Arn) -> Self {
        Self { arn }
    }

    pub fn arn(&self) -> &Arn {
        &self.arn
    }
}
