//! Subcommand bodies
//!
//! Everything here returns text; `main` decides where it goes.

use crate::terminal::{Osc52Clipboard, TerminalShare, TextNavigator};
use anyhow::Context;
use hny_letter::{
    DecodeFailure, Field, LetterDecoder, LetterDraft, LetterEncoder, LetterRecord, LetterView,
    LinkConfig, ShareLink,
};
use hny_share::{share_link, write_back, ShareOutcome};
use std::path::Path;

/// Config from an optional file, with command-line overrides applied last
///
/// # Errors
/// Returns error if the file cannot be loaded or the result is invalid
pub fn load_config(
    path: Option<&Path>,
    base_url: Option<&str>,
    no_date: bool,
) -> anyhow::Result<LinkConfig> {
    let mut config = match path {
        Some(path) => LinkConfig::load(path)?,
        None => LinkConfig::new(),
    };
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }
    if no_date {
        config = config.with_stamp_date(false);
    }
    config.validate()?;
    Ok(config)
}

/// Form values collected from the command line
#[derive(Debug, Clone, Default)]
pub struct LetterArgs {
    pub to: String,
    pub to_label: Option<String>,
    pub from: String,
    pub from_label: Option<String>,
    pub message: String,
}

impl LetterArgs {
    /// Fill a draft, keeping default labels unless overridden
    #[must_use]
    pub fn into_draft(self) -> LetterDraft {
        let mut draft = LetterDraft::new();
        draft.set(Field::ReceiverName, self.to);
        draft.set(Field::Message, self.message);
        draft.set(Field::SenderName, self.from);
        if let Some(label) = self.to_label {
            draft.set(Field::ReceiverLabel, label);
        }
        if let Some(label) = self.from_label {
            draft.set(Field::SenderLabel, label);
        }
        draft
    }
}

/// Read a message from a file, dropping one trailing newline
///
/// # Errors
/// Returns error if the file cannot be read
pub fn read_message(path: &Path) -> anyhow::Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading message from {}", path.display()))?;
    let text = text.strip_suffix('\n').unwrap_or(&text);
    Ok(text.strip_suffix('\r').unwrap_or(text).to_string())
}

/// Encode a draft into a link
///
/// # Errors
/// Returns error if the draft is incomplete or encoding fails
pub fn encode_letter(config: LinkConfig, args: LetterArgs) -> anyhow::Result<ShareLink> {
    let letter = args.into_draft().finish()?;
    let encoder = LetterEncoder::new(config)?;
    Ok(encoder.encode(&letter)?)
}

/// Hand a link to the terminal's share and clipboard adapters
pub async fn share_in_terminal(link: &ShareLink) -> ShareOutcome {
    share_link(link, &TerminalShare, &Osc52Clipboard::stdout()).await
}

/// Human or JSON rendering of a decoded letter
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn render_record(record: &LetterRecord, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(record)?);
    }
    let mut out = Vec::new();
    for field in Field::REQUIRED {
        out.push(format!("{}: {}", field, record.field(field).replace('\n', "\\n")));
    }
    if let Some(phone) = &record.sender_phone {
        out.push(format!("senderPhone: {phone}"));
    }
    if let Some(date) = &record.date {
        out.push(format!("date: {date}"));
    }
    Ok(out.join("\n"))
}

/// Decode a URL or bare parameter
///
/// # Errors
/// Returns the decode failure
pub fn decode_input(config: &LinkConfig, input: &str) -> Result<LetterRecord, DecodeFailure> {
    LetterDecoder::new(config).decode_input(input)
}

/// The viewer page as text
#[must_use]
pub fn render_view(config: &LinkConfig, input: &str) -> (bool, String) {
    let view = LetterView::from_input(&LetterDecoder::new(config), input);
    (view.is_found(), view.lines().join("\n"))
}

/// Where "write back" would take the reader
///
/// # Errors
/// Returns the decode failure
pub fn render_reply(config: &LinkConfig, input: &str) -> Result<String, DecodeFailure> {
    let letter = decode_input(config, input)?;
    let navigator = TextNavigator::new();
    write_back(&navigator, &letter);
    Ok(navigator.lines().join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hny_letter::{LetterError, DEFAULT_SENDER_LABEL};

    fn args() -> LetterArgs {
        LetterArgs {
            to: "김토스".to_string(),
            to_label: None,
            from: "장키위".to_string(),
            from_label: Some("올림".to_string()),
            message: "새해 복 많이 받으세요".to_string(),
        }
    }

    #[test]
    fn draft_keeps_default_labels() {
        let mut args = args();
        args.from_label = None;
        let draft = args.into_draft();
        assert_eq!(draft.receiver_label, "님께");
        assert_eq!(draft.sender_label, DEFAULT_SENDER_LABEL);
    }

    #[test]
    fn encode_then_render() {
        let config = LinkConfig::new().with_stamp_date(false);
        let link = encode_letter(config.clone(), args()).unwrap();
        let record = decode_input(&config, &link.url).unwrap();
        assert_eq!(
            render_record(&record, false).unwrap(),
            "receiverName: 김토스\nreceiverLabel: 님께\nmessage: 새해 복 많이 받으세요\nsenderName: 장키위\nsenderLabel: 올림"
        );
    }

    #[test]
    fn incomplete_letter_is_rejected() {
        let mut args = args();
        args.message = String::new();
        let err = encode_letter(LinkConfig::new(), args).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LetterError>(),
            Some(&LetterError::MissingField(Field::Message))
        );
    }

    #[test]
    fn view_of_bad_input_is_not_found() {
        let (found, text) = render_view(&LinkConfig::new(), "https://example.com/?x=1");
        assert!(!found);
        assert_eq!(text, hny_letter::NOT_FOUND_TEXT);
    }

    #[test]
    fn reply_swaps_names() {
        let config = LinkConfig::new();
        let link = encode_letter(config.clone(), args()).unwrap();
        assert_eq!(
            render_reply(&config, &link.param).unwrap(),
            "page: /kiwi\nto: 장키위\nfrom: 김토스"
        );
    }
}
