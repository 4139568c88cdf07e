// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use cadence_rrule::{parse, serialize, validate};

use crate::audit::AuditError;

/// The name of the Cadence application.
pub const APP_NAME: &str = "cadence";

const DEFAULT_RULE: &str = "FREQ=DAILY";

/// Configuration for the Cadence application.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rule used for habits that carry no rule of their own.
    pub default_rule: String,

    /// If true, stored rules that are not canonical are treated as errors.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_rule: DEFAULT_RULE.to_string(),
            strict: false,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    ///
    /// The default rule is rewritten to its canonical form. In strict mode a
    /// default rule that is not already canonical is rejected instead.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::DefaultRule`] in strict mode when the default
    /// rule is blank or not canonical.
    pub fn normalize(&mut self) -> Result<(), AuditError> {
        if self.strict {
            validate(&self.default_rule).map_err(AuditError::DefaultRule)?;
            return Ok(());
        }

        let canonical = serialize(&parse(&self.default_rule));
        if canonical != self.default_rule {
            tracing::warn!(
                default_rule = %self.default_rule,
                %canonical,
                "default rule is not canonical, normalized"
            );
            self.default_rule = canonical;
        }
        Ok(())
    }

    /// The given rule, or the configured default when it is blank.
    #[must_use]
    pub fn rule_or_default<'a>(&'a self, rule: &'a str) -> &'a str {
        if rule.trim().is_empty() {
            &self.default_rule
        } else {
            rule
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_fields_are_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_rule, "FREQ=DAILY");
        assert!(!config.strict);
    }

    #[test]
    fn deserializes_fields() {
        let config: Config = toml::from_str(
            r#"
default_rule = "FREQ=WEEKLY;BYDAY=MO"
strict = true
"#,
        )
        .unwrap();
        assert_eq!(config.default_rule, "FREQ=WEEKLY;BYDAY=MO");
        assert!(config.strict);
    }

    #[test]
    fn normalize_rewrites_default_rule() {
        let mut config = Config {
            default_rule: "every 2 weeks".to_string(),
            strict: false,
        };
        config.normalize().unwrap();
        assert_eq!(config.default_rule, "FREQ=WEEKLY;INTERVAL=2");
    }

    #[test]
    fn normalize_rejects_non_canonical_in_strict_mode() {
        let mut config = Config {
            default_rule: "FREQ=DAILY;INTERVAL=1".to_string(),
            strict: true,
        };
        let err = config.normalize().unwrap_err();
        assert!(matches!(err, AuditError::DefaultRule(_)));
        assert_eq!(config.default_rule, "FREQ=DAILY;INTERVAL=1");
    }

    #[test]
    fn normalize_accepts_canonical_in_strict_mode() {
        let mut config = Config {
            default_rule: "FREQ=MONTHLY;BYDAY=-1FR".to_string(),
            strict: true,
        };
        assert!(config.normalize().is_ok());
    }

    #[test]
    fn blank_rules_fall_back_to_default() {
        let config = Config {
            default_rule: "FREQ=YEARLY".to_string(),
            strict: false,
        };
        assert_eq!(config.rule_or_default(""), "FREQ=YEARLY");
        assert_eq!(config.rule_or_default("  "), "FREQ=YEARLY");
        assert_eq!(config.rule_or_default("FREQ=WEEKLY"), "FREQ=WEEKLY");
    }
}
