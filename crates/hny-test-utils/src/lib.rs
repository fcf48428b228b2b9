//! Testing utilities for HNY workspace
//!
//! Shared fixtures, pinned clocks, producers for links in the older
//! formats, and in-memory collaborators.

#![allow(missing_docs)]

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, TimeZone, Utc};
use hny_letter::{Clock, LetterEncoder, LetterRecord, LinkConfig, Prefill};
use hny_share::{Clipboard, ClipboardError, NativeShare, Navigator, Page, ShareError, ShareRequest};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

pub fn sample_letter() -> LetterRecord {
    LetterRecord::new("김토스", "님께", "새해 복 많이 받으세요", "장키위", "올림")
}

pub fn multiline_letter() -> LetterRecord {
    LetterRecord::new(
        "김토스",
        "님께",
        "올해도 건강하세요!\n\n늘 고마워요 🙏 — \"키위\" & co.\n",
        "장키위",
        "드림",
    )
}

/// Base64 of this letter contains both `+` and `/` in every format
pub fn symbol_heavy_letter() -> LetterRecord {
    LetterRecord::new("김토스", "님께", "받으세요 건강하세요?? 새해", "장키위", "올림")
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Noon UTC on the given day
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        Self(Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn encoder_at(clock: FixedClock) -> LetterEncoder {
    LetterEncoder::with_clock(LinkConfig::new(), Arc::new(clock)).unwrap()
}

/// Link producers for the formats that predate the current one
pub mod legacy {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct PhoneForm<'a> {
        receiver_name: &'a str,
        receiver_label: &'a str,
        message: &'a str,
        sender_name: &'a str,
        sender_label: &'a str,
        sender_phone: &'a str,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct PlainForm<'a> {
        receiver_name: &'a str,
        receiver_label: &'a str,
        message: &'a str,
        sender_name: &'a str,
        sender_label: &'a str,
    }

    /// First format: raw base64 with padding, phone included
    pub fn v1_param(letter: &LetterRecord, phone: &str) -> String {
        let json = serde_json::to_string(&PhoneForm {
            receiver_name: &letter.receiver_name,
            receiver_label: &letter.receiver_label,
            message: &letter.message,
            sender_name: &letter.sender_name,
            sender_label: &letter.sender_label,
            sender_phone: phone,
        })
        .unwrap();
        STANDARD.encode(json.as_bytes())
    }

    /// Second format: `-`/`_` substitutes, padding stripped, no phone
    pub fn v2_param(letter: &LetterRecord) -> String {
        let json = serde_json::to_string(&PlainForm {
            receiver_name: &letter.receiver_name,
            receiver_label: &letter.receiver_label,
            message: &letter.message,
            sender_name: &letter.sender_name,
            sender_label: &letter.sender_label,
        })
        .unwrap();
        STANDARD
            .encode(json.as_bytes())
            .replace('+', "-")
            .replace('/', "_")
            .trim_end_matches('=')
            .to_string()
    }

    /// A raw V1 parameter after form-style query decoding turned `+` into spaces
    pub fn form_decoded(param: &str) -> String {
        param.replace('+', " ")
    }
}

/// Clipboard that records writes, or refuses them
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    deny: bool,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn denying() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            deny: true,
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError::Denied("test clipboard".to_string()));
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

/// Share sheet that answers with a fixed result
#[derive(Debug)]
pub struct ScriptedShare {
    supported: bool,
    result: Result<(), ShareError>,
    requests: Mutex<Vec<ShareRequest>>,
}

impl ScriptedShare {
    pub fn answering(result: Result<(), ShareError>) -> Self {
        Self {
            supported: true,
            result,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            result: Err(ShareError::Unavailable),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ShareRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl NativeShare for ScriptedShare {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        self.requests.lock().push(request.clone());
        self.result.clone()
    }
}

/// Navigator that records every transition
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<(Page, Option<Prefill>)>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<(Page, Option<Prefill>)> {
        self.visits.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, page: Page, prefill: Option<Prefill>) {
        self.visits.lock().push((page, prefill));
    }
}
