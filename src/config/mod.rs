//! Configuration system for xpnav
//!
//! A single YAML file with built-in defaults and environment overrides. CLI
//! flags are applied on top by the trace command.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use defaults::{DEFAULT_TRACE_COMMAND, DEFAULT_WATCH_INTERVAL_SECS};
pub use loader::ConfigLoader;
pub use schema::{Config, KubectlConfig, UiConfig};

/// Keys accepted by `config get` and `config set`
pub const CONFIG_KEYS: &[&str] = &[
    "traceCommand",
    "watchInterval",
    "shortColumns",
    "ui.showHelp",
    "ui.enableMouse",
    "kubectl.binary",
    "kubectl.pager",
];

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "traceCommand" => Ok(config.trace_command.clone()),
        "watchInterval" => Ok(config.watch_interval.to_string()),
        "shortColumns" => Ok(config.short_columns.to_string()),
        "ui.showHelp" => Ok(config.ui.show_help.to_string()),
        "ui.enableMouse" => Ok(config.ui.enable_mouse.to_string()),
        "kubectl.binary" => Ok(config.kubectl.binary.clone()),
        "kubectl.pager" => Ok(config.kubectl.pager.clone().unwrap_or_default()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "traceCommand" => {
            if value.trim().is_empty() {
                anyhow::bail!("traceCommand must not be empty");
            }
            config.trace_command = value.to_string();
        }
        "watchInterval" => {
            let secs: u64 = value
                .parse()
                .context("watchInterval must be a number of seconds")?;
            if secs == 0 {
                anyhow::bail!("watchInterval must be at least 1 second");
            }
            config.watch_interval = secs;
        }
        "shortColumns" => {
            config.short_columns = value
                .parse()
                .context("shortColumns must be 'true' or 'false'")?;
        }
        "ui.showHelp" => {
            config.ui.show_help = value
                .parse()
                .context("ui.showHelp must be 'true' or 'false'")?;
        }
        "ui.enableMouse" => {
            config.ui.enable_mouse = value
                .parse()
                .context("ui.enableMouse must be 'true' or 'false'")?;
        }
        "kubectl.binary" => {
            config.kubectl.binary = value.to_string();
        }
        "kubectl.pager" => {
            config.kubectl.pager = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_every_key() {
        let mut config = Config::default();
        for key in CONFIG_KEYS {
            let current = get_config_value(&config, key).unwrap();
            if !current.is_empty() {
                set_config_value(&mut config, key, &current).unwrap();
            }
        }
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_validates_values() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "watchInterval", "soon").is_err());
        assert!(set_config_value(&mut config, "watchInterval", "0").is_err());
        assert!(set_config_value(&mut config, "ui.showHelp", "maybe").is_err());
        assert!(set_config_value(&mut config, "readOnly", "true").is_err());

        set_config_value(&mut config, "kubectl.pager", "bat").unwrap();
        assert_eq!(get_config_value(&config, "kubectl.pager").unwrap(), "bat");
        set_config_value(&mut config, "kubectl.pager", "").unwrap();
        assert_eq!(config.kubectl.pager, None);
    }
}
