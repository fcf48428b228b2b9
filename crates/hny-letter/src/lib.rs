//! HNY Letter
//!
//! New-Year letters that live entirely inside a shareable URL.
//!
//! # Core Concepts
//!
//! - [`LetterRecord`]: the fields of one letter
//! - [`LetterDraft`]: form state that becomes a record once complete
//! - [`Variant`]: the shipped link formats; [`Variant::CURRENT`] is written
//! - [`LetterEncoder`]: record → [`ShareLink`] (`https://…/?f=<param>`)
//! - [`decode`] / [`LetterDecoder`]: parameter of any variant → record
//! - [`LetterView`]: viewer state, with presentation defaults
//!
//! # Example
//!
//! ```rust,ignore
//! use hny_letter::{decode, LetterEncoder, LetterRecord, LinkConfig};
//!
//! let letter = LetterRecord::new("김토스", "님께", "새해 복 많이 받으세요", "장키위", "올림");
//! let link = LetterEncoder::new(LinkConfig::new())?.encode(&letter)?;
//!
//! let back = decode(&link.param)?;
//! assert_eq!(back.message, letter.message);
//! assert!(back.date.is_some());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod config;
mod date;
mod decoder;
mod encoder;
mod error;
mod record;
mod variant;
mod view;
mod wire;

// Re-exports
pub use config::{
    LinkConfig, DEFAULT_BASE_URL, DEFAULT_PARAM_NAME, DEFAULT_SHORTENER_HINT_LEN,
    DEFAULT_UTC_OFFSET_MINUTES,
};
pub use date::{display_date, Clock, SystemClock};
pub use decoder::{decode, decode_url, LetterDecoder};
pub use encoder::{encode, LetterEncoder, ShareLink};
pub use error::{ConfigError, DecodeFailure, EncodeError, LetterError};
pub use record::{
    Field, LetterDraft, LetterRecord, Prefill, DEFAULT_RECEIVER_LABEL, DEFAULT_SENDER_LABEL,
};
pub use variant::{reverse_symbol, Variant, VariantRules};
pub use view::{LetterView, ViewedLetter, DATE_PLACEHOLDER, NOT_FOUND_TEXT};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
