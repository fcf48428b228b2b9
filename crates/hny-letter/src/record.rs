//! Letter records and the drafts they are composed from
//!
//! [`LetterRecord`] is what travels inside a link. [`LetterDraft`] is the
//! mutable form state a composer edits before it becomes a record.

use crate::error::LetterError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Default suffix after the receiver's name
pub const DEFAULT_RECEIVER_LABEL: &str = "님께";

/// Default suffix after the sender's name
pub const DEFAULT_SENDER_LABEL: &str = "드림";

/// One greeting letter
///
/// Serialized field order is fixed by declaration order. Optional fields
/// that are `None` are omitted entirely, so presence round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterRecord {
    pub receiver_name: String,
    pub receiver_label: String,
    pub message: String,
    pub sender_name: String,
    pub sender_label: String,
    /// Only links from the first link format carry a phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_phone: Option<String>,
    /// Encode-time display date, frozen into the link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl LetterRecord {
    /// Create a record from the five required fields
    #[must_use]
    pub fn new(
        receiver_name: impl Into<String>,
        receiver_label: impl Into<String>,
        message: impl Into<String>,
        sender_name: impl Into<String>,
        sender_label: impl Into<String>,
    ) -> Self {
        Self {
            receiver_name: receiver_name.into(),
            receiver_label: receiver_label.into(),
            message: message.into(),
            sender_name: sender_name.into(),
            sender_label: sender_label.into(),
            sender_phone: None,
            date: None,
        }
    }

    /// With a stamped display date
    #[inline]
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// With a sender phone number
    #[inline]
    #[must_use]
    pub fn with_sender_phone(mut self, phone: impl Into<String>) -> Self {
        self.sender_phone = Some(phone.into());
        self
    }

    /// Text of a required field
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::ReceiverName => &self.receiver_name,
            Field::ReceiverLabel => &self.receiver_label,
            Field::Message => &self.message,
            Field::SenderName => &self.sender_name,
            Field::SenderLabel => &self.sender_label,
        }
    }

    /// First required field that is blank, in form order
    #[must_use]
    pub fn missing_field(&self) -> Option<Field> {
        Field::REQUIRED
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
    }

    /// Whether every required field has text
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}

/// Required letter fields, named by their wire keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ReceiverName,
    ReceiverLabel,
    Message,
    SenderName,
    SenderLabel,
}

impl Field {
    /// Required fields in form order
    pub const REQUIRED: [Field; 5] = [
        Field::ReceiverName,
        Field::ReceiverLabel,
        Field::Message,
        Field::SenderName,
        Field::SenderLabel,
    ];

    /// Wire key of this field
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Field::ReceiverName => "receiverName",
            Field::ReceiverLabel => "receiverLabel",
            Field::Message => "message",
            Field::SenderName => "senderName",
            Field::SenderLabel => "senderLabel",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values a navigation hands to the composer
///
/// Missing entries fall back to the draft defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_label: Option<String>,
}

impl Prefill {
    /// Prefill for writing back to the sender of `letter`
    ///
    /// Names swap sides; labels reset to the defaults.
    #[must_use]
    pub fn reply_to(letter: &LetterRecord) -> Self {
        Self {
            receiver_name: Some(letter.sender_name.clone()),
            receiver_label: None,
            sender_name: Some(letter.receiver_name.clone()),
            sender_label: None,
        }
    }
}

/// Letter being composed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterDraft {
    pub receiver_name: String,
    pub receiver_label: String,
    pub message: String,
    pub sender_name: String,
    pub sender_label: String,
}

impl Default for LetterDraft {
    fn default() -> Self {
        Self {
            receiver_name: String::new(),
            receiver_label: DEFAULT_RECEIVER_LABEL.to_string(),
            message: String::new(),
            sender_name: String::new(),
            sender_label: DEFAULT_SENDER_LABEL.to_string(),
        }
    }
}

impl LetterDraft {
    /// Empty draft with default labels
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft seeded from a navigation prefill; the message always starts empty
    #[must_use]
    pub fn from_prefill(prefill: Prefill) -> Self {
        let defaults = Self::default();
        Self {
            receiver_name: prefill.receiver_name.unwrap_or(defaults.receiver_name),
            receiver_label: prefill.receiver_label.unwrap_or(defaults.receiver_label),
            message: defaults.message,
            sender_name: prefill.sender_name.unwrap_or(defaults.sender_name),
            sender_label: prefill.sender_label.unwrap_or(defaults.sender_label),
        }
    }

    /// Set a required field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::ReceiverName => &mut self.receiver_name,
            Field::ReceiverLabel => &mut self.receiver_label,
            Field::Message => &mut self.message,
            Field::SenderName => &mut self.sender_name,
            Field::SenderLabel => &mut self.sender_label,
        };
        *slot = value.into();
    }

    /// First blank required field, in form order
    #[must_use]
    pub fn missing_field(&self) -> Option<Field> {
        self.as_record().missing_field()
    }

    /// Whether the draft can be finished
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Turn the draft into a record
    ///
    /// # Errors
    /// Returns [`LetterError::MissingField`] naming the first blank field.
    /// Text is kept verbatim; whitespace only matters for the blank check.
    pub fn finish(self) -> Result<LetterRecord, LetterError> {
        if let Some(field) = self.missing_field() {
            return Err(LetterError::MissingField(field));
        }
        Ok(self.into_record())
    }

    fn as_record(&self) -> LetterRecord {
        self.clone().into_record()
    }

    fn into_record(self) -> LetterRecord {
        LetterRecord::new(
            self.receiver_name,
            self.receiver_label,
            self.message,
            self.sender_name,
            self.sender_label,
        )
    }
}
