//! Collaborator adapters for a terminal host

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hny_letter::Prefill;
use hny_share::{Clipboard, ClipboardError, NativeShare, Navigator, Page, ShareError, ShareRequest};
use parking_lot::Mutex;
use std::io::{IsTerminal, Write};

/// Clipboard through the OSC 52 terminal escape
///
/// Works over SSH in terminals that honor OSC 52. Writes are refused when
/// the output is not a terminal.
pub struct Osc52Clipboard<W> {
    out: Mutex<W>,
    enabled: bool,
}

impl Osc52Clipboard<std::io::Stdout> {
    /// Clipboard writing to stdout, enabled only on a tty
    #[must_use]
    pub fn stdout() -> Self {
        let stdout = std::io::stdout();
        let enabled = stdout.is_terminal();
        Self {
            out: Mutex::new(stdout),
            enabled,
        }
    }
}

impl<W: Write + Send + 'static> Osc52Clipboard<W> {
    /// Clipboard writing to any sink
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            enabled: true,
        }
    }

    /// Recover the sink
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

#[async_trait]
impl<W: Write + Send + 'static> Clipboard for Osc52Clipboard<W> {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if !self.enabled {
            return Err(ClipboardError::Denied("output is not a terminal".to_string()));
        }
        let sequence = format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()));
        let mut out = self.out.lock();
        out.write_all(sequence.as_bytes())
            .map_err(|e| ClipboardError::Failed(e.to_string()))?;
        out.flush().map_err(|e| ClipboardError::Failed(e.to_string()))
    }
}

/// Terminals have no share sheet
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalShare;

#[async_trait]
impl NativeShare for TerminalShare {
    fn is_supported(&self) -> bool {
        false
    }

    async fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }
}

/// Navigator that describes transitions as text
#[derive(Debug, Default)]
pub struct TextNavigator {
    lines: Mutex<Vec<String>>,
}

impl TextNavigator {
    /// Create an empty navigator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines describing every transition so far
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Navigator for TextNavigator {
    fn navigate(&self, page: Page, prefill: Option<Prefill>) {
        let mut lines = self.lines.lock();
        lines.push(format!("page: {page}"));
        if let Some(prefill) = prefill {
            let entries = [
                ("to", prefill.receiver_name),
                ("to-label", prefill.receiver_label),
                ("from", prefill.sender_name),
                ("from-label", prefill.sender_label),
            ];
            for (name, value) in entries {
                if let Some(value) = value {
                    lines.push(format!("{name}: {value}"));
                }
            }
        }
    }
}
