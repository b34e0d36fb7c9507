// src/config.rs
//! Run configuration: which stages and frequency kinds to report, plus an
//! optional `npca.toml` overlay in the working directory. CLI flags are
//! applied on top of the file by the binary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "npca.toml";

/// Metric selection surface: four stage groups crossed with two frequency
/// kinds. Defaults to everything enabled.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricConfig {
    #[serde(default = "default_true")]
    pub stage2: bool,
    #[serde(default = "default_true")]
    pub stage3: bool,
    #[serde(default = "default_true")]
    pub stage4: bool,
    #[serde(default = "default_true")]
    pub stage5: bool,
    #[serde(default = "default_true")]
    pub raw: bool,
    #[serde(default = "default_true")]
    pub normed: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            stage2: true,
            stage3: true,
            stage4: true,
            stage5: true,
            raw: true,
            normed: true,
        }
    }
}

impl MetricConfig {
    #[must_use]
    pub fn stage_enabled(&self, stage: u8) -> bool {
        match stage {
            2 => self.stage2,
            3 => self.stage3,
            4 => self.stage4,
            5 => self.stage5,
            _ => false,
        }
    }
}

/// On-disk configuration shape (`npca.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcaToml {
    #[serde(default)]
    pub metrics: Option<MetricConfig>,
}

/// Full run configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub metrics: MetricConfig,
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config with the `npca.toml` overlay applied, if present.
    /// A missing file is not an error; a malformed one is ignored with a
    /// warning so a stray file never blocks a run.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config(Path::new(CONFIG_FILE));
        config
    }

    pub fn load_local_config(&mut self, path: &Path) {
        let Ok(content) = fs::read_to_string(path) else {
            return;
        };
        self.parse_toml(&content);
    }

    pub fn parse_toml(&mut self, content: &str) {
        match toml::from_str::<NpcaToml>(content) {
            Ok(parsed) => {
                if let Some(metrics) = parsed.metrics {
                    self.metrics = metrics;
                }
            }
            Err(e) => eprintln!("WARN: ignoring malformed {CONFIG_FILE}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let m = MetricConfig::default();
        for stage in 2..=5 {
            assert!(m.stage_enabled(stage));
        }
        assert!(m.raw && m.normed);
        assert!(!m.stage_enabled(1));
    }

    #[test]
    fn toml_overlay_replaces_metrics() {
        let mut config = Config::new();
        config.parse_toml("[metrics]\nstage2 = false\nnormed = false\n");
        assert!(!config.metrics.stage2);
        assert!(!config.metrics.normed);
        // Unmentioned fields keep their serde defaults (enabled).
        assert!(config.metrics.stage3);
        assert!(config.metrics.raw);
    }

    #[test]
    fn malformed_toml_keeps_defaults() {
        let mut config = Config::new();
        config.parse_toml("not [ valid toml");
        assert_eq!(config.metrics, MetricConfig::default());
    }
}
