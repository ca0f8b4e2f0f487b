//! Engine configuration for trailgraph
//!
//! Configuration is read from a TOML file with `[graph]`, `[search]` and
//! `[logging]` tables. Every field has a default, so an empty file is valid.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};

pub use types::{EngineConfig, GraphConfig, LoggingConfig, SearchConfig, CONFIG_FORMAT_VERSION};

impl EngineConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "configuration written by a newer version"
            );
        }
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert_eq!(config.graph.kind, GraphKind::Directed);
        assert!(config.search.validate_weights);
        assert!(config.logging.level.is_none());
        assert!(!config.logging.json);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let config = EngineConfig::from_toml(
            r#"
[graph]
kind = "undirected"

[search]
validate_weights = false

[logging]
level = "trailgraph=trace"
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.graph.kind, GraphKind::Undirected);
        assert!(!config.search.validate_weights);
        assert_eq!(config.logging.level.as_deref(), Some("trailgraph=trace"));
        assert!(config.logging.json);
    }

    #[test]
    fn test_unknown_graph_kind_is_rejected() {
        let err = EngineConfig::from_toml("[graph]\nkind = \"bipartite\"\n").unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trailgraph.toml");

        let mut config = EngineConfig::default();
        config.graph.kind = GraphKind::Undirected;
        config.logging.level = Some("debug".to_string());
        config.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = EngineConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
