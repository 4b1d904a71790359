//! Tuning knobs for classification and traversal.
//!
//! Configuration is optional: [`GraphConfig::default`] is what
//! [`Graph::new`](crate::graph::Graph::new) uses. A TOML file can override
//! individual fields; anything omitted keeps its default.
//!
//! ```toml
//! [classifier]
//! transitivity = "edge_scan"
//!
//! [traversal]
//! recursion_limit = 1024
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default number of drain steps a recursive traversal takes before it
/// unwinds and re-enters on the remaining frontier.
pub const DEFAULT_RECURSION_LIMIT: usize = 4096;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub traversal: TraversalConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub transitivity: TransitivityStrategy,
}

/// How [`Graph::is_transitive`](crate::graph::Graph::is_transitive) looks
/// for the closing edge of each `(a, b), (b, c)` pair.
///
/// Both strategies give the same answer on every graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitivityStrategy {
    /// Compare every edge triple. O(|E|³).
    EdgeScan,
    /// Walk successors through the adjacency index.
    #[default]
    SourceIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Maximum call depth of one recursive drain. `0` behaves like `1`.
    #[serde(default = "default_recursion_limit")]
    pub recursion_limit: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            recursion_limit: default_recursion_limit(),
        }
    }
}

impl TraversalConfig {
    /// The recursion limit with the `0 → 1` floor applied.
    #[must_use]
    pub const fn effective_recursion_limit(&self) -> usize {
        if self.recursion_limit == 0 {
            1
        } else {
            self.recursion_limit
        }
    }
}

impl GraphConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML or a field has the
    /// wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content).context("Failed to parse graph config")
    }
}

/// Load a [`GraphConfig`] from `path`.
///
/// A missing file yields the default configuration.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<GraphConfig> {
    if !path.exists() {
        return Ok(GraphConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<GraphConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_recursion_limit() -> usize {
    DEFAULT_RECURSION_LIMIT
}
