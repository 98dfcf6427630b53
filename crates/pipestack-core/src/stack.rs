//! The construction scope resources register into.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::errors::SynthError;
use crate::template::{Resource, Template};

/// A single deployment unit. Resources are registered under unique logical
/// ids and projected into a [`Template`] once construction is finished.
///
/// A stack is a single-owner object: it is threaded mutably through one
/// construction sequence and never shared.
#[derive(Debug)]
pub struct Stack {
    name: String,
    description: Option<String>,
    resources: IndexMap<String, Resource>,
}

impl Stack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            resources: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a resource under `logical_id`.
    ///
    /// # Errors
    ///
    /// Fails if the id is empty or non-alphanumeric, if the id is already
    /// taken, or if the properties cannot be serialized.
    pub fn add_resource(
        &mut self,
        logical_id: &str,
        resource_type: &str,
        properties: &impl Serialize,
    ) -> Result<(), SynthError> {
        validate_logical_id(logical_id)?;
        if self.resources.contains_key(logical_id) {
            return Err(SynthError::DuplicateLogicalId(logical_id.to_string()));
        }

        let properties = serde_json::to_value(properties)?;
        debug!(logical_id, resource_type, "registered resource");
        self.resources.insert(
            logical_id.to_string(),
            Resource {
                resource_type: resource_type.to_string(),
                properties,
            },
        );
        Ok(())
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Project the accumulated resources into a template. The stack itself
    /// is left untouched, so this is a pure snapshot of current state.
    pub fn template(&self) -> Template {
        Template::new(self.description.clone(), self.resources.clone())
    }
}

/// Logical ids follow the provider's rules: non-empty, ASCII alphanumeric.
fn validate_logical_id(id: &str) -> Result<(), SynthError> {
    if id.is_empty() {
        return Err(SynthError::InvalidLogicalId {
            id: id.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if let Some(bad) = id.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(SynthError::InvalidLogicalId {
            id: id.to_string(),
            reason: format!("contains invalid character '{bad}'"),
        });
    }
    Ok(())
}
