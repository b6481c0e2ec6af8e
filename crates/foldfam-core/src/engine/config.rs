use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Shared analysis settings, passed explicitly into each engine component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Atom-name field selecting the backbone trace of each residue.
    pub backbone_atom: String,
    /// Gap character of the multiple alignment.
    pub gap_character: char,
    /// Default distance cutoff for flat-cluster extraction, in Å.
    pub cluster_threshold: f64,
    /// Decimal places used for branch lengths in Newick output.
    pub newick_precision: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            backbone_atom: "CA".to_string(),
            gap_character: '-',
            cluster_threshold: 3.0,
            newick_precision: 4,
        }
    }
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    backbone_atom: Option<String>,
    gap_character: Option<char>,
    cluster_threshold: Option<f64>,
    newick_precision: Option<usize>,
}

impl AnalysisConfigBuilder {
    pub fn backbone_atom(mut self, name: impl Into<String>) -> Self {
        self.backbone_atom = Some(name.into());
        self
    }
    pub fn gap_character(mut self, gap: char) -> Self {
        self.gap_character = Some(gap);
        self
    }
    pub fn cluster_threshold(mut self, threshold: f64) -> Self {
        self.cluster_threshold = Some(threshold);
        self
    }
    pub fn newick_precision(mut self, precision: usize) -> Self {
        self.newick_precision = Some(precision);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let defaults = AnalysisConfig::default();
        AnalysisConfig {
            backbone_atom: self.backbone_atom.unwrap_or(defaults.backbone_atom),
            gap_character: self.gap_character.unwrap_or(defaults.gap_character),
            cluster_threshold: self.cluster_threshold.unwrap_or(defaults.cluster_threshold),
            newick_precision: self.newick_precision.unwrap_or(defaults.newick_precision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_applies_defaults_for_omitted_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("analysis.toml");
        fs::write(&path, "cluster_threshold = 2.5\n").unwrap();

        let config = AnalysisConfig::load(&path).unwrap();
        assert_eq!(config.cluster_threshold, 2.5);
        assert_eq!(config.backbone_atom, "CA");
        assert_eq!(config.gap_character, '-');
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = AnalysisConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("analysis.toml");
        fs::write(&path, "this is not toml").unwrap();
        let result = AnalysisConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn builder_overrides_selected_fields() {
        let config = AnalysisConfig::builder()
            .backbone_atom("CB")
            .cluster_threshold(1.0)
            .build();
        assert_eq!(config.backbone_atom, "CB");
        assert_eq!(config.cluster_threshold, 1.0);
        assert_eq!(config.newick_precision, 4);
    }
}
