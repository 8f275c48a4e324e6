//! Configuration schema.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Commit collection configuration.
    #[serde(default)]
    pub collect: CollectConfig,

    /// Git process configuration.
    #[serde(default)]
    pub git: GitConfig,

    /// Protocol sorting configuration.
    #[serde(default)]
    pub protocols: ProtocolsConfig,
}

impl Config {
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.git.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "git.timeout_secs must be positive".to_string(),
            ));
        }

        let markers = [
            ("protocols.protocol_element", &self.protocols.protocol_element),
            ("protocols.container_element", &self.protocols.container_element),
            ("protocols.reference_element", &self.protocols.reference_element),
            ("protocols.test_case_marker", &self.protocols.test_case_marker),
            (
                "protocols.semi_automated_marker",
                &self.protocols.semi_automated_marker,
            ),
            ("protocols.setup_marker", &self.protocols.setup_marker),
        ];
        for (key, value) in markers {
            if value.is_empty() {
                return Err(ConfigError::Invalid(format!("{key} must not be empty")));
            }
        }

        Ok(())
    }
}

/// Commit collection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Default JSON output path.
    #[serde(default = "default_collect_output")]
    pub output: String,

    /// Prefix of each commit's key in the JSON output.
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            output: default_collect_output(),
            label_prefix: default_label_prefix(),
        }
    }
}

fn default_collect_output() -> String {
    "git_info.json".to_string()
}

fn default_label_prefix() -> String {
    "commit_".to_string()
}

/// Git process configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Time limit for one `git` invocation, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GitConfig {
    /// Returns the timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Protocol sorting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolsConfig {
    /// Name of the repeatable protocol element.
    #[serde(default = "default_protocol_element")]
    pub protocol_element: String,

    /// Name of the container whose children are rewritten per bucket.
    #[serde(default = "default_container_element")]
    pub container_element: String,

    /// Name of the child element holding the test script reference.
    #[serde(default = "default_reference_element")]
    pub reference_element: String,

    /// Path segment where the test-case-relative path starts.
    #[serde(default = "default_test_case_marker")]
    pub test_case_marker: String,

    /// Literal marking a semi-automated test case.
    #[serde(default = "default_semi_automated_marker")]
    pub semi_automated_marker: String,

    /// Literal followed by the setup name.
    #[serde(default = "default_setup_marker")]
    pub setup_marker: String,
}

impl Default for ProtocolsConfig {
    fn default() -> Self {
        Self {
            protocol_element: default_protocol_element(),
            container_element: default_container_element(),
            reference_element: default_reference_element(),
            test_case_marker: default_test_case_marker(),
            semi_automated_marker: default_semi_automated_marker(),
            setup_marker: default_setup_marker(),
        }
    }
}

fn default_protocol_element() -> String {
    "protocol".to_string()
}

fn default_container_element() -> String {
    "protocols".to_string()
}

fn default_reference_element() -> String {
    "test-script-reference".to_string()
}

fn default_test_case_marker() -> String {
    "/test_cases/".to_string()
}

fn default_semi_automated_marker() -> String {
    "Title: Semi-automated:".to_string()
}

fn default_setup_marker() -> String {
    "Setup: ".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.collect.output, "git_info.json");
        assert_eq!(config.collect.label_prefix, "commit_");
        assert_eq!(config.git.timeout_secs, 30);
        assert_eq!(config.git.timeout(), Duration::from_secs(30));
        assert_eq!(config.protocols.protocol_element, "protocol");
        assert_eq!(config.protocols.container_element, "protocols");
        assert_eq!(config.protocols.reference_element, "test-script-reference");
        assert_eq!(config.protocols.test_case_marker, "/test_cases/");
        assert_eq!(
            config.protocols.semi_automated_marker,
            "Title: Semi-automated:"
        );
        assert_eq!(config.protocols.setup_marker, "Setup: ");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let toml = r#"
            [git]
            timeout_secs = 5

            [protocols]
            test_case_marker = "/tests/"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.git.timeout_secs, 5);
        assert_eq!(config.protocols.test_case_marker, "/tests/");
        assert_eq!(config.protocols.setup_marker, "Setup: ");
        assert_eq!(config.collect.output, "git_info.json");
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.git.timeout_secs = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("git.timeout_secs"));
    }

    #[test]
    fn test_validate_empty_marker() {
        let mut config = Config::default();
        config.protocols.setup_marker = String::new();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("protocols.setup_marker"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let back: Config = toml::from_str(&toml).unwrap();
        assert_eq!(back, config);
    }
}
