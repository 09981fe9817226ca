//! Configuration loading
//!
//! Precedence (highest to lowest): CLI flags (applied by the caller),
//! environment variable overrides, the config file, built-in defaults.

use super::{defaults, paths, schema::Config};
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the root config file (when present) with env overrides applied
    pub fn load() -> Result<Config> {
        let path = paths::root_config_path();
        let config = if path.exists() {
            Self::load_file(&path)?
        } else {
            Self::load_defaults()
        };
        Ok(Self::apply_env_overrides(config, |key| std::env::var(key).ok()))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the config file, failing on syntax errors, unknown keys and bad values
    pub fn validate() -> Result<()> {
        let path = paths::root_config_path();
        if !path.exists() {
            return Ok(());
        }
        let config = Self::load_file(&path)?;
        Self::check(&config)
    }

    /// Semantic checks that serde cannot express
    pub fn check(config: &Config) -> Result<()> {
        if config.trace_command.split_whitespace().next().is_none() {
            anyhow::bail!("traceCommand must not be empty");
        }
        if config.watch_interval == 0 {
            anyhow::bail!("watchInterval must be at least 1 second");
        }
        if config.kubectl.binary.trim().is_empty() {
            anyhow::bail!("kubectl.binary must not be empty");
        }
        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply environment variable overrides read through `lookup`
    pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(command) = lookup("XPNAV_TRACE_COMMAND").filter(|c| !c.trim().is_empty()) {
            config.trace_command = command;
        }

        if let Some(interval) = lookup("XPNAV_WATCH_INTERVAL") {
            match interval.parse::<u64>() {
                Ok(secs) if secs > 0 => config.watch_interval = secs,
                _ => tracing::warn!(value = %interval, "Ignoring invalid XPNAV_WATCH_INTERVAL"),
            }
        }

        if let Some(short) = lookup("XPNAV_SHORT") {
            match short.parse::<bool>() {
                Ok(val) => config.short_columns = val,
                Err(_) => tracing::warn!(value = %short, "Ignoring invalid XPNAV_SHORT"),
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigLoader::apply_env_overrides(
            Config::default(),
            env(&[
                ("XPNAV_TRACE_COMMAND", "kubectl crossplane trace -o json"),
                ("XPNAV_WATCH_INTERVAL", "30"),
                ("XPNAV_SHORT", "true"),
            ]),
        );
        assert_eq!(config.trace_command, "kubectl crossplane trace -o json");
        assert_eq!(config.watch_interval, 30);
        assert!(config.short_columns);
    }

    #[test]
    fn test_invalid_env_values_ignored() {
        let config = ConfigLoader::apply_env_overrides(
            Config::default(),
            env(&[("XPNAV_WATCH_INTERVAL", "0"), ("XPNAV_SHORT", "yes")]),
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            watch_interval: 12,
            ..Default::default()
        };
        ConfigLoader::save(&config, &path).unwrap();
        assert_eq!(ConfigLoader::load_file(&path).unwrap(), config);
    }

    #[test]
    fn test_check_rejects_zero_interval() {
        let config = Config {
            watch_interval: 0,
            ..Default::default()
        };
        assert!(ConfigLoader::check(&config).is_err());
        assert!(ConfigLoader::check(&Config::default()).is_ok());
    }
}
