//! Configuration type definitions

use crate::graph::GraphKind;
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Shortest-path search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            graph: GraphConfig::default(),
            search: SearchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration for graph construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Directed or undirected edges
    #[serde(default)]
    pub kind: GraphKind,
}

/// Configuration for shortest-path searches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Reject NaN and negative edge weights during relaxation
    #[serde(default = "default_validate_weights")]
    pub validate_weights: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            validate_weights: default_validate_weights(),
        }
    }
}

/// Configuration for structured logging
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or full filter directive (e.g. "debug", "trailgraph=trace")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON lines instead of the compact format
    #[serde(default)]
    pub json: bool,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_validate_weights() -> bool {
    true
}
