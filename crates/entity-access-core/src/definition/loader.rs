//! Loading group definitions from YAML and JSON

use super::types::GroupDefinition;
use crate::error::DefinitionError;
use std::fs;
use std::path::Path;

impl GroupDefinition {
    /// Parse a definition from YAML content
    pub fn from_yaml_str(content: &str) -> Result<Self, DefinitionError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a definition from JSON content
    pub fn from_json_str(content: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a definition file, picking the format from its extension
    /// (`.yaml`, `.yml` or `.json`)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, DefinitionError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(DefinitionError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loading condition group definition");
        parse(&content)
    }
}
