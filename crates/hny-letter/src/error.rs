//! Error types for the letter codec
//!
//! Provides error handling for:
//! - Draft validation (form → record)
//! - Encoding (record → link)
//! - Decoding (link → record)
//! - Link configuration loading

use crate::record::Field;
use std::path::PathBuf;

/// Errors while turning a draft into a letter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LetterError {
    /// A required field is empty
    #[error("required field is empty: {0}")]
    MissingField(Field),
}

/// Errors while encoding a letter into a link
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The record could not be serialized
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The encoder configuration is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// The link does not carry a readable letter
///
/// Every variant is recoverable: the viewer shows its "letter not found"
/// state and nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum DecodeFailure {
    /// The URL has no letter parameter
    #[error("missing query parameter '{0}'")]
    MissingParam(String),

    /// The parameter is present but blank
    #[error("empty letter parameter")]
    Empty,

    /// Pad markers cannot complete the last symbol group
    #[error("cannot restore padding for {len} symbols")]
    BadPadding { len: usize },

    /// Symbols outside the base64 alphabet, or a broken group
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not UTF-8 text
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Text does not describe a letter
    #[error("invalid letter data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors while loading or validating link configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or type error
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Base URL is not an absolute http(s) URL without a fragment
    #[error("invalid base url: '{0}'")]
    InvalidBaseUrl(String),

    /// Parameter name would need escaping in a query string
    #[error("invalid parameter name: '{0}'")]
    InvalidParamName(String),

    /// Base URL query already sets the letter parameter
    #[error("base url '{base_url}' already has a '{param_name}' parameter")]
    ParamInBaseUrl {
        base_url: String,
        param_name: String,
    },

    /// Offset is a day or more away from UTC
    #[error("utc offset out of range: {0} minutes")]
    InvalidOffset(i32),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
