//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Lanes in the venue's pool.
    ///
    /// Signed so that a misconfigured zero or negative count still loads and
    /// simply produces no heats.
    pub lanes_per_heat: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self { lanes_per_heat: 8 }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        // Load from environment variables (HEATS_*)
        Self::file_figment(config_path)
            .merge(Env::prefixed("HEATS_"))
            .extract()
    }

    /// Defaults merged with the config files, without the environment layer.
    fn file_figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Resolves the lane count, letting a command-line value win.
    ///
    /// Zero and negative counts resolve to 0 lanes.
    pub fn lanes(&self, flag: Option<i64>) -> usize {
        let lanes = flag.unwrap_or(self.lanes_per_heat);
        usize::try_from(lanes).unwrap_or(0)
    }
}

/// Returns the platform-specific config directory for heats.
///
/// On Linux: `~/.config/heats`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("heats"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_eight_lanes() {
        assert_eq!(Config::default().lanes_per_heat, 8);
    }

    #[test]
    fn test_dirs_config_path_ends_with_heats() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "heats");
    }

    #[test]
    fn test_lanes_flag_overrides_config() {
        let config = Config { lanes_per_heat: 8 };
        assert_eq!(config.lanes(None), 8);
        assert_eq!(config.lanes(Some(6)), 6);
    }

    #[test]
    fn test_non_positive_lanes_resolve_to_zero() {
        let config = Config { lanes_per_heat: -4 };
        assert_eq!(config.lanes(None), 0);
        assert_eq!(config.lanes(Some(0)), 0);
        assert_eq!(config.lanes(Some(-1)), 0);
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "lanes_per_heat = 6\n").unwrap();

        let config: Config = Config::file_figment(Some(&path)).extract().unwrap();
        assert_eq!(config.lanes_per_heat, 6);
    }

    #[test]
    fn test_load_from_rejects_wrong_type() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "lanes_per_heat = \"eight\"\n").unwrap();

        let result: Result<Config, _> = Config::file_figment(Some(&path)).extract();
        assert!(result.is_err());
    }
}
