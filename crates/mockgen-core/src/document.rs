use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::InterfaceInfo;

/// Serialized output of a schema extractor: one or more record types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SchemaDocument {
    /// Contract version for this document format.
    #[serde(default = "default_document_version")]
    pub document_version: String,
    /// Source the interfaces were extracted from, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub interfaces: Vec<InterfaceInfo>,
}

fn default_document_version() -> String {
    crate::DOCUMENT_VERSION.to_string()
}

impl SchemaDocument {
    pub fn new(interfaces: Vec<InterfaceInfo>) -> Self {
        Self {
            document_version: default_document_version(),
            source: None,
            interfaces,
        }
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Look up a record type by exact name.
    pub fn interface(&self, name: &str) -> Result<&InterfaceInfo> {
        self.interfaces
            .iter()
            .find(|interface| interface.name == name)
            .ok_or_else(|| Error::TypeNotFound {
                name: name.to_string(),
                available: self.interface_names(),
            })
    }

    pub fn interface_names(&self) -> Vec<String> {
        self.interfaces
            .iter()
            .map(|interface| interface.name.clone())
            .collect()
    }
}
