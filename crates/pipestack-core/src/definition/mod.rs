//! The YAML definition surface: parse, validate, synthesize.

pub mod parser;
pub mod synth;
pub mod types;
pub mod validator;

pub use parser::{parse_definition, parse_definition_str};
pub use synth::synthesize;
pub use types::PipelineDefinition;
pub use validator::validate_definition;
