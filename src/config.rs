//! Error-policy configuration
//!
//! The policy is resolved once, before the entry points are loaded, and handed to
//! [`Gl`](crate::Gl) by value. Nothing changes it afterwards.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Environment variable that overrides the configured policy
pub const POLICY_ENV_VAR: &str = "FLICK_GL_ERROR_POLICY";

/// What happens when the driver reports an error after a wrapped call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Drain and log every pending error, then carry on
    Log,
    /// Drain and log, then abort the process if anything was pending
    Assert,
    /// Never call `glGetError`
    None,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ErrorPolicy::Assert
        } else {
            ErrorPolicy::None
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "log" => Ok(ErrorPolicy::Log),
            "assert" => Ok(ErrorPolicy::Assert),
            "none" | "off" => Ok(ErrorPolicy::None),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorPolicy::Log => "log",
            ErrorPolicy::Assert => "assert",
            ErrorPolicy::None => "none",
        };
        f.write_str(name)
    }
}

/// Configuration for a [`Gl`](crate::Gl) instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlConfig {
    pub error_policy: ErrorPolicy,
}

impl GlConfig {
    pub fn new(error_policy: ErrorPolicy) -> Self {
        Self { error_policy }
    }

    /// Parse a TOML document such as `error_policy = "log"`
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading GL config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Apply `FLICK_GL_ERROR_POLICY` if it is set
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_policy_override(std::env::var(POLICY_ENV_VAR).ok().as_deref())
    }

    fn with_policy_override(mut self, value: Option<&str>) -> Result<Self> {
        if let Some(value) = value {
            self.error_policy = value.parse()?;
        }
        Ok(self)
    }

    /// Defaults, then the optional config file, then the environment
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };
        let config = config.with_env_overrides()?;
        info!(policy = %config.error_policy, "GL error policy resolved");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_follows_build() {
        let expected = if cfg!(debug_assertions) {
            ErrorPolicy::Assert
        } else {
            ErrorPolicy::None
        };
        assert_eq!(GlConfig::default().error_policy, expected);
    }

    #[test]
    fn test_parse_policy_names() {
        assert_eq!("log".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Log);
        assert_eq!(" Assert ".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Assert);
        assert_eq!("none".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::None);
        assert!(matches!(
            "loud".parse::<ErrorPolicy>(),
            Err(Error::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_toml_config() {
        let config = GlConfig::from_toml_str("error_policy = \"log\"\n").unwrap();
        assert_eq!(config.error_policy, ErrorPolicy::Log);

        let empty = GlConfig::from_toml_str("").unwrap();
        assert_eq!(empty, GlConfig::default());

        assert!(GlConfig::from_toml_str("error_policy = \"sometimes\"").is_err());
    }

    #[test]
    fn test_override_wins_over_file() {
        let config = GlConfig::new(ErrorPolicy::Log)
            .with_policy_override(Some("none"))
            .unwrap();
        assert_eq!(config.error_policy, ErrorPolicy::None);

        let untouched = GlConfig::new(ErrorPolicy::Log)
            .with_policy_override(None)
            .unwrap();
        assert_eq!(untouched.error_policy, ErrorPolicy::Log);
    }

    #[test]
    fn test_display_matches_parse() {
        for policy in [ErrorPolicy::Log, ErrorPolicy::Assert, ErrorPolicy::None] {
            assert_eq!(policy.to_string().parse::<ErrorPolicy>().unwrap(), policy);
        }
    }
}
