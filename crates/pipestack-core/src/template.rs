//! The emitted deployment template.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// One declared resource: a provider type name plus its properties.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    #[serde(rename = "Type")]
    pub resource_type: String,
    #[serde(rename = "Properties")]
    pub properties: serde_json::Value,
}

/// A complete deployment template. Resources keep declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Resources")]
    pub resources: IndexMap<String, Resource>,
}

impl Template {
    pub fn new(description: Option<String>, resources: IndexMap<String, Resource>) -> Self {
        Self {
            format_version: TEMPLATE_FORMAT_VERSION.to_string(),
            description,
            resources,
        }
    }

    /// Look up a resource by logical id.
    pub fn resource(&self, logical_id: &str) -> Option<&Resource> {
        self.resources.get(logical_id)
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Render the template as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
