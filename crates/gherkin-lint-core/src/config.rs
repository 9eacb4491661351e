//! Configuration types for gherkin-lint.

use crate::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Top-level configuration for gherkin-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Linter-level configuration.
    #[serde(default)]
    pub linter: LinterConfig,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled. Rules are enabled unless switched off.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity for a rule, defaulting to [`Severity::Error`].
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Severity {
        self.rules
            .get(rule_name)
            .and_then(|c| c.severity)
            .unwrap_or_default()
    }

    /// Gets the user-supplied options for a rule (empty if unconfigured).
    #[must_use]
    pub fn rule_options(&self, rule_name: &str) -> RuleOptions {
        self.rules
            .get(rule_name)
            .map(|c| c.options.clone())
            .unwrap_or_default()
    }
}

/// Linter-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Glob patterns of documents to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl LinterConfig {
    /// Checks if a path matches one of the exclude patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is not a valid glob.
    pub fn is_excluded(&self, path: &Path) -> Result<bool, ConfigError> {
        for pattern in &self.exclude {
            let glob = glob::Pattern::new(pattern).map_err(|e| ConfigError::Pattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            if glob.matches_path(path) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity for this rule's diagnostics.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Rule-specific options.
    #[serde(flatten)]
    pub options: RuleOptions,
}

/// Rule-specific options as key-value pairs.
///
/// Rules declare their accepted options and defaults as a `RuleOptions`
/// (see [`Rule::available_configs`](crate::Rule::available_configs)); the
/// linter merges user values over those defaults with [`RuleOptions::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleOptions(toml::Table);

impl RuleOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Gets a raw option value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.0.get(key)
    }

    /// Iterates over the options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &toml::Value)> {
        self.0.iter()
    }

    /// Gets a string array option; non-string entries are skipped.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Vec<&str> {
        self.0
            .get(key)
            .and_then(toml::Value::as_array)
            .map(|arr| arr.iter().filter_map(toml::Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Merges user options over a rule's declared defaults.
    ///
    /// Keys absent from `user` take the default. Keys absent from
    /// `defaults` and values whose TOML type differs from the default's
    /// type are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownOption`] or [`ConfigError::OptionType`].
    pub fn merge(rule: &str, defaults: &Self, user: &Self) -> Result<Self, ConfigError> {
        let mut merged = defaults.clone();
        for (key, value) in &user.0 {
            let Some(default) = defaults.0.get(key) else {
                return Err(ConfigError::UnknownOption {
                    rule: rule.to_string(),
                    key: key.clone(),
                });
            };
            if default.type_str() != value.type_str() {
                return Err(ConfigError::OptionType {
                    rule: rule.to_string(),
                    key: key.clone(),
                    expected: default.type_str(),
                    found: value.type_str(),
                });
            }
            merged.0.insert(key.clone(), value.clone());
        }
        Ok(merged)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Option not declared by the rule.
    #[error("Rule `{rule}` has no option `{key}`")]
    UnknownOption {
        /// Rule being configured.
        rule: String,
        /// Offending key.
        key: String,
    },

    /// Option value of the wrong type.
    #[error("Rule `{rule}` option `{key}` must be {expected}, found {found}")]
    OptionType {
        /// Rule being configured.
        rule: String,
        /// Offending key.
        key: String,
        /// Type of the declared default.
        expected: &'static str,
        /// Type supplied by the user.
        found: &'static str,
    },

    /// Option value rejected by the rule itself.
    #[error("Rule `{rule}` option `{key}`: {message}")]
    InvalidOption {
        /// Rule being configured.
        rule: String,
        /// Offending key.
        key: String,
        /// What is wrong with the value.
        message: String,
    },

    /// Invalid exclude glob.
    #[error("Invalid exclude pattern `{pattern}`: {message}")]
    Pattern {
        /// The pattern as written.
        pattern: String,
        /// Glob error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_defaults() -> RuleOptions {
        RuleOptions::new().with("tags", toml::Value::Array(Vec::new()))
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert!(config.is_rule_enabled("allowed-tags"));
        assert_eq!(config.rule_severity("allowed-tags"), Severity::Error);
        assert_eq!(config.rule_options("allowed-tags"), RuleOptions::new());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[linter]
exclude = ["**/generated/**"]

[rules.allowed-tags]
severity = "warning"
tags = ["@smoke", "@wip"]

[rules.other]
enabled = false
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.linter.exclude, vec!["**/generated/**"]);
        assert!(config.is_rule_enabled("allowed-tags"));
        assert!(!config.is_rule_enabled("other"));
        assert_eq!(config.rule_severity("allowed-tags"), Severity::Warning);
        assert_eq!(
            config.rule_options("allowed-tags").get_str_array("tags"),
            vec!["@smoke", "@wip"]
        );
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("[rules.allowed-tags\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_severity_is_parse_error() {
        let err = Config::parse("[rules.allowed-tags]\nseverity = \"fatal\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn merge_takes_defaults_for_missing_keys() {
        let merged = RuleOptions::merge("allowed-tags", &tag_defaults(), &RuleOptions::new())
            .unwrap();
        assert_eq!(merged, tag_defaults());
        assert!(merged.get_str_array("tags").is_empty());
    }

    #[test]
    fn merge_overrides_declared_keys() {
        let user = RuleOptions::new().with("tags", vec!["@smoke"]);
        let merged = RuleOptions::merge("allowed-tags", &tag_defaults(), &user).unwrap();
        assert_eq!(merged.get_str_array("tags"), vec!["@smoke"]);
    }

    #[test]
    fn merge_rejects_unknown_key() {
        let user = RuleOptions::new().with("tag", vec!["@smoke"]);
        let err = RuleOptions::merge("allowed-tags", &tag_defaults(), &user).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownOption { ref key, .. } if key == "tag"));
    }

    #[test]
    fn merge_rejects_wrong_type() {
        let user = RuleOptions::new().with("tags", "@smoke");
        let err = RuleOptions::merge("allowed-tags", &tag_defaults(), &user).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Rule `allowed-tags` option `tags` must be array, found string"
        );
    }

    #[test]
    fn exclude_patterns_match_paths() {
        let linter = LinterConfig {
            exclude: vec!["**/generated/**".to_string()],
        };
        assert!(linter
            .is_excluded(Path::new("features/generated/a.feature.json"))
            .unwrap());
        assert!(!linter
            .is_excluded(Path::new("features/login.feature.json"))
            .unwrap());
    }

    #[test]
    fn invalid_exclude_pattern_is_reported() {
        let linter = LinterConfig {
            exclude: vec!["[".to_string()],
        };
        let err = linter.is_excluded(Path::new("a.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Pattern { .. }));
    }
}
