//! Collaborator ports
//!
//! The host (browser, terminal, app shell) implements these; the letter
//! core only hands them finished strings and records.

use crate::error::{ClipboardError, ShareError};
use hny_letter::{Prefill, ShareLink};
use std::fmt::{self, Display, Formatter};

/// Default native share title
pub const SHARE_TITLE: &str = "새해 편지가 도착했어요";

/// Default native share body
pub const SHARE_TEXT: &str = "링크를 열어 새해 편지를 확인해 보세요.";

/// System clipboard
#[async_trait::async_trait]
pub trait Clipboard: Send + Sync {
    /// Place text on the clipboard
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Host share sheet
#[async_trait::async_trait]
pub trait NativeShare: Send + Sync {
    /// Feature detection; `false` skips straight to the clipboard
    fn is_supported(&self) -> bool {
        true
    }

    /// Open the share sheet
    async fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// Page transitions
pub trait Navigator: Send + Sync {
    /// Go to `page`, optionally seeding the composer
    fn navigate(&self, page: Page, prefill: Option<Prefill>);
}

/// Title, text and URL handed to the share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    /// Create a share request
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            url: url.into(),
        }
    }

    /// Request with the default title and text
    #[must_use]
    pub fn for_link(link: &ShareLink) -> Self {
        Self::new(SHARE_TITLE, SHARE_TEXT, link.url.clone())
    }
}

/// Pages of the letter site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Letter viewer, reads the `f` parameter
    View,
    /// Letter composer
    Create,
}

impl Page {
    /// Route path
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Page::View => "/",
            Page::Create => "/kiwi",
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hny_letter::Variant;

    #[test]
    fn request_for_link_uses_url() {
        let link = ShareLink {
            url: "https://example.com/?f=abc".to_string(),
            param: "abc".to_string(),
            variant: Variant::CURRENT,
        };
        let request = ShareRequest::for_link(&link);
        assert_eq!(request.title, SHARE_TITLE);
        assert_eq!(request.url, link.url);
    }

    #[test]
    fn page_paths() {
        assert_eq!(Page::View.path(), "/");
        assert_eq!(Page::Create.to_string(), "/kiwi");
    }
}
