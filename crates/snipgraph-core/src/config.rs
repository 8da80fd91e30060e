//! Configuration for snipgraph
//!
//! Configuration is read from `snipgraph.toml` in the working directory,
//! from the path in `SNIPGRAPH_CONFIG`, or from an explicit `--config`.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, SnipError};

pub use types::{Config, DuplicateConfig, GraphConfig, CONFIG_FORMAT_VERSION};

/// Default configuration file name
pub const CONFIG_FILE: &str = "snipgraph.toml";

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "SNIPGRAPH_CONFIG";

fn check_unit(context: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        bail_invalid!(context, value);
    }
    Ok(())
}

fn check_non_negative(context: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value >= 0.0) {
        bail_invalid!(context, value);
    }
    Ok(())
}

impl DuplicateConfig {
    /// Whether an overlap score is high enough to flag a duplicate
    pub fn is_duplicate(&self, score: f64) -> bool {
        score >= self.threshold
    }
}

impl GraphConfig {
    /// Whether a composite score is high enough to add an edge
    pub fn clears_edge_threshold(&self, composite: f64) -> bool {
        composite >= self.edge_threshold
    }

    /// Node size for an item with the given number of tags
    pub fn node_size(&self, tag_count: usize) -> f64 {
        (self.node_base_size + self.node_size_per_tag * tag_count as f64).min(self.node_max_size)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SnipError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the configuration to use
    ///
    /// An explicit path must exist. Otherwise `SNIPGRAPH_CONFIG`, then
    /// `snipgraph.toml` under `root` are tried, falling back to defaults.
    pub fn resolve(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| root.join(CONFIG_FILE));

        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "load_config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject thresholds and weights outside their valid ranges
    pub fn validate(&self) -> Result<()> {
        check_unit("duplicates.threshold", self.duplicates.threshold)?;
        check_unit("graph.edge_threshold", self.graph.edge_threshold)?;
        check_unit("graph.keyword_weight", self.graph.keyword_weight)?;
        check_unit("graph.tag_weight", self.graph.tag_weight)?;
        check_unit("graph.tag_step", self.graph.tag_step)?;

        check_non_negative("graph.node_base_size", self.graph.node_base_size)?;
        check_non_negative("graph.node_size_per_tag", self.graph.node_size_per_tag)?;

        if !(self.graph.layout_extent.is_finite() && self.graph.layout_extent > 0.0) {
            bail_invalid!("graph.layout_extent", self.graph.layout_extent);
        }
        if !(self.graph.node_max_size.is_finite()
            && self.graph.node_max_size >= self.graph.node_base_size)
        {
            bail_invalid!("graph.node_max_size", self.graph.node_max_size);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert!(config.items_file.is_none());
        assert_eq!(config.duplicates.threshold, 0.5);
        assert_eq!(config.graph.edge_threshold, 0.15);
        assert_eq!(config.graph.keyword_weight, 0.6);
        assert_eq!(config.graph.tag_weight, 0.4);
        assert_eq!(config.graph.tag_step, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            items_file: Some("items.json".to_string()),
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[graph]\nedge_threshold = 0.3\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.graph.edge_threshold, 0.3);
        assert_eq!(loaded.graph.keyword_weight, 0.6);
        assert_eq!(loaded.duplicates.threshold, 0.5);
        assert_eq!(loaded.version, CONFIG_FORMAT_VERSION);
    }

    #[test]
    fn test_load_rejects_out_of_range_threshold() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[duplicates]\nthreshold = 1.5\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, SnipError::InvalidValue { .. }));
        assert!(err.to_string().contains("duplicates.threshold"));
    }

    #[test]
    fn test_validate_rejects_non_positive_extent() {
        let mut config = Config::default();
        config.graph.layout_extent = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_extent() {
        for extent in [f64::NAN, f64::INFINITY] {
            let mut config = Config::default();
            config.graph.layout_extent = extent;
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("graph.layout_extent"));
        }
    }

    #[test]
    fn test_validate_rejects_negative_node_sizes() {
        let mut config = Config::default();
        config.graph.node_base_size = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("graph.node_base_size"));

        let mut config = Config::default();
        config.graph.node_size_per_tag = -2.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("graph.node_size_per_tag"));

        let mut config = Config::default();
        config.graph.node_max_size = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_rejects_nan_extent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[graph]\nlayout_extent = nan\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, SnipError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[graph\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, SnipError::Toml(_)));
    }

    #[test]
    fn test_resolve_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        // SNIPGRAPH_CONFIG is not set in the test environment
        if std::env::var(CONFIG_ENV_VAR).is_err() {
            let config = Config::resolve(None, dir.path()).unwrap();
            assert_eq!(config, Config::default());
        }
    }

    #[test]
    fn test_resolve_explicit_missing_file_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::resolve(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_duplicate_threshold_inclusive() {
        let config = DuplicateConfig::default();
        assert!(config.is_duplicate(0.5));
        assert!(!config.is_duplicate(0.499_999));
    }

    #[test]
    fn test_edge_threshold_inclusive() {
        let config = GraphConfig::default();
        assert!(config.clears_edge_threshold(0.15));
        assert!(!config.clears_edge_threshold(0.149_999));
    }

    #[test]
    fn test_node_size_capped() {
        let config = GraphConfig::default();
        assert_eq!(config.node_size(0), 5.0);
        assert_eq!(config.node_size(3), 11.0);
        assert_eq!(config.node_size(5), 15.0);
        assert_eq!(config.node_size(12), 15.0);
    }
}
