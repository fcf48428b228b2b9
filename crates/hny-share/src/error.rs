//! Error types reported by collaborator ports

/// Clipboard write failed
///
/// Never shown as a dialog: the UI simply does not enter its "copied"
/// state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// Host refused clipboard access
    #[error("clipboard access denied: {0}")]
    Denied(String),

    /// Write failed for another reason
    #[error("clipboard write failed: {0}")]
    Failed(String),
}

/// Native share did not complete
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    /// Host has no native share sheet
    #[error("native share unavailable")]
    Unavailable,

    /// User dismissed the share sheet
    #[error("share cancelled by user")]
    Cancelled,

    /// Share sheet failed
    #[error("share failed: {0}")]
    Failed(String),
}

impl ShareError {
    /// Whether the clipboard should be tried instead
    #[inline]
    #[must_use]
    pub fn falls_back_to_clipboard(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}
