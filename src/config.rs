//! Client configuration
//!
//! Names of the space, tag, edge type and properties the client works
//! against. Every field defaults to the `eventRelations` event dataset, so
//! an empty or absent config file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SPACE: &str = "eventRelations";
pub const DEFAULT_VERTEX_TAG: &str = "person";
pub const DEFAULT_VERTEX_PROPERTY: &str = "fullname";
pub const DEFAULT_EDGE_TYPE: &str = "event";
pub const DEFAULT_LABEL_KEY: &str = "event_id";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Graph space every statement runs in
    pub space: String,
    /// Tag carried by person vertices
    pub vertex_tag: String,
    /// String property written on each vertex (set to the vid)
    pub vertex_property: String,
    /// Edge type linking two people
    pub edge_type: String,
    /// Integer edge property used as the edge label
    pub label_key: String,
    /// Seed for sampling when a row limit is given; unseeded when absent
    pub sample_seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            space: DEFAULT_SPACE.to_string(),
            vertex_tag: DEFAULT_VERTEX_TAG.to_string(),
            vertex_property: DEFAULT_VERTEX_PROPERTY.to_string(),
            edge_type: DEFAULT_EDGE_TYPE.to_string(),
            label_key: DEFAULT_LABEL_KEY.to_string(),
            sample_seed: None,
        }
    }
}

impl ClientConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as unit, not an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Default config location (~/.config/relgraph/config.yaml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("relgraph").join("config.yaml"))
    }

    /// Load `path` if given. Otherwise load the default location if a file
    /// exists there, falling back to defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(default) if default.exists() => Self::load(default),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ClientConfig::from_yaml_str("").unwrap(), ClientConfig::default());
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let cfg = ClientConfig::from_yaml_str("space: meetings\nsample_seed: 7\n").unwrap();
        assert_eq!(cfg.space, "meetings");
        assert_eq!(cfg.sample_seed, Some(7));
        assert_eq!(cfg.edge_type, DEFAULT_EDGE_TYPE);
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(matches!(
            ClientConfig::from_yaml_str("sample_seed: many"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "label_key: meeting_id").unwrap();

        let cfg = ClientConfig::load(file.path()).unwrap();
        assert_eq!(cfg.label_key, "meeting_id");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = ClientConfig::resolve(Some(Path::new("/nonexistent/relgraph.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
