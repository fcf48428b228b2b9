//! Letter encoder
//!
//! Writes a [`LetterRecord`] into a shareable link using
//! [`Variant::CURRENT`]:
//! 1. Stamp the encode-time date (when enabled and not already stamped)
//! 2. Drop fields the current variant does not carry
//! 3. Serialize to compact JSON
//! 4. UTF-8 expand, base64, substitute, strip padding
//! 5. Append to the base URL as the letter parameter

use crate::config::LinkConfig;
use crate::date::{display_date, Clock, SystemClock};
use crate::error::{ConfigError, EncodeError};
use crate::record::LetterRecord;
use crate::variant::Variant;
use crate::wire;
use chrono::FixedOffset;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// An encoded letter link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// Complete URL to share
    pub url: String,
    /// Encoded parameter alone
    pub param: String,
    /// Variant the parameter was written in
    pub variant: Variant,
}

impl ShareLink {
    /// Length of the full URL in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.url.chars().count()
    }

    /// Whether the URL is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }

    /// Whether the UI should suggest an external URL shortener
    #[inline]
    #[must_use]
    pub fn suggests_shortener(&self, config: &LinkConfig) -> bool {
        self.len() > config.shortener_hint_len
    }
}

impl Display for ShareLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Encoder bound to a configuration and a clock
#[derive(Clone)]
pub struct LetterEncoder {
    config: LinkConfig,
    offset: FixedOffset,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for LetterEncoder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LetterEncoder")
            .field("config", &self.config)
            .field("variant", &Variant::CURRENT)
            .finish_non_exhaustive()
    }
}

impl LetterEncoder {
    /// Create an encoder using wall-clock time
    ///
    /// # Errors
    /// Returns error if the configuration is invalid
    pub fn new(config: LinkConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an encoder with an explicit clock
    ///
    /// # Errors
    /// Returns error if the configuration is invalid
    pub fn with_clock(config: LinkConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        config.validate()?;
        let offset = config.offset()?;
        Ok(Self {
            config,
            offset,
            clock,
        })
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// The record exactly as it will be written into the link
    ///
    /// A record that already has a date keeps it; dates are never
    /// re-stamped.
    #[must_use]
    pub fn prepare(&self, record: &LetterRecord) -> LetterRecord {
        let rules = Variant::CURRENT.rules();
        let mut prepared = record.clone();
        if !rules.carries_phone {
            prepared.sender_phone = None;
        }
        if !rules.carries_date {
            prepared.date = None;
        } else if self.config.stamp_date && prepared.date.is_none() {
            let now = self.clock.now().with_timezone(&self.offset);
            prepared.date = Some(display_date(&now));
        }
        prepared
    }

    /// Encode into the bare parameter value
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn encode_param(&self, record: &LetterRecord) -> Result<String, EncodeError> {
        let json = serde_json::to_string(&self.prepare(record))?;
        Ok(wire::to_link_symbols(&json, Variant::CURRENT))
    }

    /// Encode into a full share link
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn encode(&self, record: &LetterRecord) -> Result<ShareLink, EncodeError> {
        let param = self.encode_param(record)?;
        let url = self.config.link_for(&param);
        tracing::debug!(
            "Encoded letter as {} ({} symbols, {} url chars)",
            Variant::CURRENT,
            param.len(),
            url.len()
        );
        Ok(ShareLink {
            url,
            param,
            variant: Variant::CURRENT,
        })
    }
}

/// Encode with the default configuration and wall-clock time
///
/// # Errors
/// Returns error if serialization fails
pub fn encode(record: &LetterRecord) -> Result<ShareLink, EncodeError> {
    LetterEncoder::new(LinkConfig::default())?.encode(record)
}
