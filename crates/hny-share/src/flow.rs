//! Share and navigation commands
//!
//! Each command returns an outcome for the UI to react to. None of them
//! affect the letter itself: by the time they run the link is final.

use crate::error::ShareError;
use crate::ports::{Clipboard, NativeShare, Navigator, Page, ShareRequest};
use hny_letter::{LetterRecord, Prefill, ShareLink};

/// Result of a clipboard copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Link is on the clipboard
    Copied,
    /// Clipboard refused; already logged
    Failed,
}

impl CopyOutcome {
    /// Whether the UI shows its "copied" confirmation
    #[inline]
    #[must_use]
    pub fn shows_confirmation(self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Result of a share attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Share sheet completed
    Shared,
    /// User dismissed the sheet; nothing to report
    Cancelled,
    /// Share unavailable or failed; link copied instead
    Copied,
    /// Share unavailable or failed, and the clipboard refused too
    CopyFailed,
}

impl ShareOutcome {
    /// Whether the UI shows its "copied" confirmation
    #[inline]
    #[must_use]
    pub fn shows_confirmation(self) -> bool {
        matches!(self, Self::Copied)
    }
}

impl From<CopyOutcome> for ShareOutcome {
    fn from(outcome: CopyOutcome) -> Self {
        match outcome {
            CopyOutcome::Copied => Self::Copied,
            CopyOutcome::Failed => Self::CopyFailed,
        }
    }
}

/// Copy a link to the clipboard
pub async fn copy_link(link: &ShareLink, clipboard: &dyn Clipboard) -> CopyOutcome {
    match clipboard.write_text(&link.url).await {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            tracing::warn!("Failed to copy link: {}", e);
            CopyOutcome::Failed
        }
    }
}

/// Share a link, falling back to the clipboard
///
/// # Policy
/// - unsupported share sheet: copy
/// - [`ShareError::Cancelled`]: silent no-op
/// - any other share error: log, then copy
pub async fn share_link(
    link: &ShareLink,
    share: &dyn NativeShare,
    clipboard: &dyn Clipboard,
) -> ShareOutcome {
    if !share.is_supported() {
        tracing::debug!("Native share unsupported, copying link");
        return copy_link(link, clipboard).await.into();
    }

    let request = ShareRequest::for_link(link);
    match share.share(&request).await {
        Ok(()) => ShareOutcome::Shared,
        Err(ShareError::Cancelled) => {
            tracing::debug!("Share cancelled by user");
            ShareOutcome::Cancelled
        }
        Err(e) => {
            if let ShareError::Failed(_) = e {
                tracing::warn!("Native share failed, copying link: {}", e);
            } else {
                tracing::debug!("Native share unavailable, copying link");
            }
            copy_link(link, clipboard).await.into()
        }
    }
}

/// Open an empty composer
pub fn open_composer(navigator: &dyn Navigator) {
    navigator.navigate(Page::Create, None);
}

/// Open the composer to write back to the sender of `letter`
pub fn write_back(navigator: &dyn Navigator, letter: &LetterRecord) {
    navigator.navigate(Page::Create, Some(Prefill::reply_to(letter)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_copied_confirms() {
        assert!(CopyOutcome::Copied.shows_confirmation());
        assert!(!CopyOutcome::Failed.shows_confirmation());
        assert!(ShareOutcome::Copied.shows_confirmation());
        assert!(!ShareOutcome::Shared.shows_confirmation());
        assert!(!ShareOutcome::Cancelled.shows_confirmation());
    }

    #[test]
    fn copy_outcome_converts() {
        assert_eq!(ShareOutcome::from(CopyOutcome::Copied), ShareOutcome::Copied);
        assert_eq!(ShareOutcome::from(CopyOutcome::Failed), ShareOutcome::CopyFailed);
    }
}
