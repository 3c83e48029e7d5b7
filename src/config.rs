//! Runtime configuration loaded from environment variables.

use crate::partition::{
    adapters::http::DEFAULT_BASE_URL,
    domain::{GroupDomainError, PartitionBounds},
};
use thiserror::Error;

/// Environment variable holding the status provider base URL.
pub const BASE_URL_ENV: &str = "GROUPSTATUS_BASE_URL";
/// Environment variable holding the lower partition bound.
pub const LOWER_ENV: &str = "GROUPSTATUS_LOWER";
/// Environment variable holding the upper partition bound.
pub const UPPER_ENV: &str = "GROUPSTATUS_UPPER";

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The configured bounds are not usable.
    #[error(transparent)]
    Bounds(#[from] GroupDomainError),
}

/// Settings for a groupstatus session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupStatusConfig {
    /// Base URL the HTTP status provider appends item ids to.
    pub base_url: String,
    /// Bounds the groups must partition.
    pub bounds: PartitionBounds,
}

impl Default for GroupStatusConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            bounds: PartitionBounds::default(),
        }
    }
}

impl GroupStatusConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Unset and blank variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupstatus::config::GroupStatusConfig;
    ///
    /// let config = GroupStatusConfig::from_lookup(|name| match name {
    ///     "GROUPSTATUS_UPPER" => Some("20".to_owned()),
    ///     _ => None,
    /// })
    /// .expect("valid configuration");
    /// assert_eq!(config.bounds.upper(), 20);
    /// assert_eq!(config.bounds.lower(), 1);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base_url = read(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let lower = parse_bound(LOWER_ENV, read(LOWER_ENV), PartitionBounds::DEFAULT_LOWER)?;
        let upper = parse_bound(UPPER_ENV, read(UPPER_ENV), PartitionBounds::DEFAULT_UPPER)?;

        Ok(Self {
            base_url,
            bounds: PartitionBounds::new(lower, upper)?,
        })
    }
}

fn parse_bound(name: &'static str, value: Option<String>, default: i64) -> Result<i64, ConfigError> {
    value.map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<i64>()
            .map_err(|err| ConfigError::InvalidValue {
                name,
                reason: format!("{raw:?} is not an integer ({err})"),
            })
    })
}
