//! Link configuration
//!
//! Where links point, what the letter parameter is called, and how the
//! encode-time date is computed. Loadable from TOML; every key is optional.
//!
//! ```toml
//! base_url = "https://happynewyear-2026.whitekiwi.link/"
//! param_name = "f"
//! stamp_date = true
//! utc_offset_minutes = 540
//! shortener_hint_len = 512
//! ```

use crate::error::ConfigError;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Host that serves the letter viewer
pub const DEFAULT_BASE_URL: &str = "https://happynewyear-2026.whitekiwi.link/";

/// Query parameter carrying the encoded letter
pub const DEFAULT_PARAM_NAME: &str = "f";

/// Korea Standard Time, UTC+9
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 9 * 60;

/// Link length past which the UI suggests an external shortener
pub const DEFAULT_SHORTENER_HINT_LEN: usize = 512;

/// Link configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Viewer URL the parameter is appended to
    pub base_url: String,
    /// Name of the letter query parameter
    pub param_name: String,
    /// Stamp an encode-time date into new links
    pub stamp_date: bool,
    /// Offset used to pick the stamped calendar day
    pub utc_offset_minutes: i32,
    /// Suggest shortening links longer than this
    pub shortener_hint_len: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            param_name: DEFAULT_PARAM_NAME.to_string(),
            stamp_date: true,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            shortener_hint_len: DEFAULT_SHORTENER_HINT_LEN,
        }
    }
}

impl LinkConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With viewer base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With date stamping on or off
    #[inline]
    #[must_use]
    pub fn with_stamp_date(mut self, stamp_date: bool) -> Self {
        self.stamp_date = stamp_date;
        self
    }

    /// With offset for the stamped calendar day
    #[inline]
    #[must_use]
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// Returns error on TOML errors or invalid values
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded link config from {}", path.display());
        Ok(config)
    }

    /// Check values
    ///
    /// # Errors
    /// Returns the first invalid value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = Url::parse(&self.base_url)
            .map_err(|_| ConfigError::InvalidBaseUrl(self.base_url.clone()))?;
        let has_host = base.host_str().is_some_and(|host| !host.is_empty());
        if !matches!(base.scheme(), "https" | "http") || !has_host || base.fragment().is_some() {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }

        let url_safe = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.');
        if self.param_name.is_empty() || !self.param_name.chars().all(url_safe) {
            return Err(ConfigError::InvalidParamName(self.param_name.clone()));
        }

        if base.query_pairs().any(|(name, _)| name == self.param_name.as_str()) {
            return Err(ConfigError::ParamInBaseUrl {
                base_url: self.base_url.clone(),
                param_name: self.param_name.clone(),
            });
        }

        self.offset().map(|_| ())
    }

    /// Offset for the stamped calendar day
    ///
    /// # Errors
    /// Returns error if the offset is a day or more away from UTC
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_minutes))
    }

    /// Full link for an encoded parameter
    #[must_use]
    pub fn link_for(&self, param: &str) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}{}={}", self.base_url, separator, self.param_name, param)
    }
}
