//! HNY Share
//!
//! Ports for the host capabilities a letter link is handed to:
//! - [`Clipboard`]: copy the link
//! - [`NativeShare`]: the host share sheet, with clipboard fallback
//! - [`Navigator`]: move between viewer and composer
//!
//! Commands ([`copy_link`], [`share_link`], [`write_back`]) return outcome
//! enums the UI turns into feedback.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod flow;
pub mod ports;

pub use error::{ClipboardError, ShareError};
pub use flow::{copy_link, open_composer, share_link, write_back, CopyOutcome, ShareOutcome};
pub use ports::{Clipboard, NativeShare, Navigator, Page, ShareRequest, SHARE_TEXT, SHARE_TITLE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
