//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};

use super::defaults::{DEFAULT_KUBECTL_BINARY, DEFAULT_TRACE_COMMAND, DEFAULT_WATCH_INTERVAL_SECS};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Command that produces a JSON trace; the target is appended
    #[serde(default = "default_trace_command")]
    pub trace_command: String,

    /// Watch mode refresh interval in seconds
    #[serde(default = "default_watch_interval")]
    pub watch_interval: u64,

    /// Hide the last-transition columns
    #[serde(default)]
    pub short_columns: bool,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub kubectl: KubectlConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UiConfig {
    /// Show the key help footer on startup
    #[serde(default = "default_true")]
    pub show_help: bool,

    /// Scroll the navigator with the mouse wheel
    #[serde(default)]
    pub enable_mouse: bool,
}

/// Cluster action configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KubectlConfig {
    #[serde(default = "default_kubectl_binary")]
    pub binary: String,

    /// Pager for get/describe output (falls back to $PAGER, then less)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pager: Option<String>,
}

fn default_trace_command() -> String {
    DEFAULT_TRACE_COMMAND.to_string()
}

fn default_watch_interval() -> u64 {
    DEFAULT_WATCH_INTERVAL_SECS
}

fn default_kubectl_binary() -> String {
    DEFAULT_KUBECTL_BINARY.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_command: default_trace_command(),
            watch_interval: default_watch_interval(),
            short_columns: false,
            ui: UiConfig::default(),
            kubectl: KubectlConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help: default_true(),
            enable_mouse: false,
        }
    }
}

impl Default for KubectlConfig {
    fn default() -> Self {
        Self {
            binary: default_kubectl_binary(),
            pager: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("traceCommand"));
        assert!(yaml.contains("watchInterval"));
        assert!(yaml.contains("showHelp"));
        assert!(!yaml.contains("pager"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
traceCommand: crossplane beta trace -o json --show-package-dependencies all
watchInterval: 10
ui:
  enableMouse: true
kubectl:
  pager: bat
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.trace_command.ends_with("all"));
        assert_eq!(config.watch_interval, 10);
        assert!(config.ui.enable_mouse);
        assert!(config.ui.show_help);
        assert_eq!(config.kubectl.binary, "kubectl");
        assert_eq!(config.kubectl.pager.as_deref(), Some("bat"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("readOnly: true\n");
        assert!(result.is_err());
    }
}
