//! What the viewer page renders
//!
//! Decoding never fills in defaults. This module is where presentation
//! defaults are applied, after a successful decode.

use crate::decoder::LetterDecoder;
use crate::error::DecodeFailure;
use crate::record::{LetterRecord, DEFAULT_RECEIVER_LABEL, DEFAULT_SENDER_LABEL};

/// Shown in place of a date for letters that were never stamped
pub const DATE_PLACEHOLDER: &str = "새해 첫날";

/// Shown when a link carries no readable letter
pub const NOT_FOUND_TEXT: &str = "편지를 찾을 수 없어요. 링크를 다시 확인해 주세요.";

/// Viewer page state
#[derive(Debug)]
pub enum LetterView {
    /// A letter to replay
    Letter(ViewedLetter),
    /// Explicit "letter not found" state
    NotFound(DecodeFailure),
}

impl LetterView {
    /// State for the viewer's letter parameter, if any
    #[must_use]
    pub fn from_param(decoder: &LetterDecoder, param: Option<&str>) -> Self {
        match param {
            Some(param) => Self::from_result(decoder.decode(param)),
            None => Self::NotFound(DecodeFailure::MissingParam(decoder.param_name().to_string())),
        }
    }

    /// State for a full URL or bare parameter
    #[must_use]
    pub fn from_input(decoder: &LetterDecoder, input: &str) -> Self {
        Self::from_result(decoder.decode_input(input))
    }

    fn from_result(result: Result<LetterRecord, DecodeFailure>) -> Self {
        match result {
            Ok(record) => Self::Letter(ViewedLetter::new(record)),
            Err(e) => Self::NotFound(e),
        }
    }

    /// Whether a letter was found
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Letter(_))
    }

    /// Rendered text lines
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Letter(letter) => letter.lines(),
            Self::NotFound(_) => vec![NOT_FOUND_TEXT.to_string()],
        }
    }
}

/// A decoded letter with presentation defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewedLetter {
    pub receiver: String,
    pub receiver_label: String,
    pub message: String,
    pub sender: String,
    pub sender_label: String,
    /// Encoded date, or [`DATE_PLACEHOLDER`]
    pub date: String,
    /// Whether `date` came from the link
    pub date_is_stamped: bool,
    record: LetterRecord,
}

impl ViewedLetter {
    /// Apply presentation defaults to a decoded record
    #[must_use]
    pub fn new(record: LetterRecord) -> Self {
        let or_default = |value: &str, default: &str| {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };
        let (date, date_is_stamped) = match record.date.as_deref() {
            Some(date) if !date.trim().is_empty() => (date.to_string(), true),
            _ => (DATE_PLACEHOLDER.to_string(), false),
        };
        Self {
            receiver: record.receiver_name.clone(),
            receiver_label: or_default(&record.receiver_label, DEFAULT_RECEIVER_LABEL),
            message: record.message.clone(),
            sender: record.sender_name.clone(),
            sender_label: or_default(&record.sender_label, DEFAULT_SENDER_LABEL),
            date,
            date_is_stamped,
            record,
        }
    }

    /// The record as decoded, without defaults
    #[inline]
    #[must_use]
    pub fn record(&self) -> &LetterRecord {
        &self.record
    }

    /// Greeting, message, date and signature as text lines
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(4);
        lines.push(format!("{} {}", self.receiver, self.receiver_label));
        lines.extend(self.message.lines().map(str::to_string));
        lines.push(self.date.clone());
        lines.push(format!("{} {}", self.sender, self.sender_label));
        lines
    }
}
