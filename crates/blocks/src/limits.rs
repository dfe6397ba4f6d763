//! Notion API request limits and the pass that enforces them.
//!
//! Conversion itself never fails on size. Once a whole document has been
//! converted, the output is checked against the limits below; each violation
//! is reported through [`LimitOptions::on_error`] and, unless truncation is
//! disabled, the output is cut down to fit.
//!
//! See <https://developers.notion.com/reference/request-limits>.

use crate::schema::{Block, RichText};
use notionmark_core::LimitError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Maximum number of blocks in one request payload.
pub const PAYLOAD_BLOCKS: usize = 1000;
/// Maximum number of spans in one rich text array.
pub const RICH_TEXT_ARRAYS: usize = 100;
/// Maximum characters in one text span's content.
pub const TEXT_CONTENT: usize = 2000;
/// Maximum characters in one text span's link URL.
pub const LINK_URL: usize = 1000;

const ELLIPSIS: &str = "...";

/// Callback invoked once per limit violation.
#[derive(Clone)]
pub struct LimitCallback(Arc<dyn Fn(&LimitError) + Send + Sync>);

impl LimitCallback {
    /// Wraps a closure.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&LimitError) + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Invokes the callback.
    pub fn call(&self, error: &LimitError) {
        (self.0)(error)
    }
}

impl Default for LimitCallback {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl std::fmt::Debug for LimitCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LimitCallback")
    }
}

/// How to behave when output exceeds the Notion request limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitOptions {
    /// Whether excess items or characters are truncated. When `false` the
    /// output is returned as-is and will not be accepted by the API.
    #[serde(default = "default_truncate")]
    pub truncate: bool,
    /// Called for every violation, whether or not truncation is enabled.
    #[serde(skip)]
    pub on_error: LimitCallback,
}

fn default_truncate() -> bool {
    true
}

impl Default for LimitOptions {
    fn default() -> Self {
        Self {
            truncate: default_truncate(),
            on_error: LimitCallback::default(),
        }
    }
}

impl LimitOptions {
    /// Sets the violation callback.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&LimitError) + Send + Sync + 'static,
    {
        self.on_error = LimitCallback::new(callback);
        self
    }

    fn report(&self, error: LimitError) {
        log::debug!("{}", error);
        self.on_error.call(&error);
    }
}

/// Enforces the payload block limit on a top-level block array.
pub fn enforce_blocks(mut blocks: Vec<Block>, limits: &LimitOptions) -> Vec<Block> {
    if blocks.len() > PAYLOAD_BLOCKS {
        limits.report(LimitError::BlocksExceeded {
            limit: PAYLOAD_BLOCKS,
            actual: blocks.len(),
        });
        if limits.truncate {
            blocks.truncate(PAYLOAD_BLOCKS);
        }
    }
    blocks
}

/// Enforces the rich text array limit, then the per-span content and URL
/// limits on whatever remains.
pub fn enforce_rich_text(mut spans: Vec<RichText>, limits: &LimitOptions) -> Vec<RichText> {
    if spans.len() > RICH_TEXT_ARRAYS {
        limits.report(LimitError::RichTextsExceeded {
            limit: RICH_TEXT_ARRAYS,
            actual: spans.len(),
        });
        if limits.truncate {
            spans.truncate(RICH_TEXT_ARRAYS);
        }
    }

    for span in &mut spans {
        let RichText::Text { text, .. } = span else {
            continue;
        };

        let length = text.content.chars().count();
        if length > TEXT_CONTENT {
            limits.report(LimitError::TextContentExceeded {
                limit: TEXT_CONTENT,
                actual: length,
            });
            if limits.truncate {
                text.content = truncate_with_ellipsis(&text.content, TEXT_CONTENT);
            }
        }

        // Truncating a URL would only produce a broken link.
        if let Some(link) = &text.link {
            let length = link.url().chars().count();
            if length > LINK_URL {
                limits.report(LimitError::LinkUrlExceeded {
                    limit: LINK_URL,
                    actual: length,
                });
            }
        }
    }

    spans
}

/// Cuts `content` so that, with the trailing ellipsis, it is `max` chars long.
fn truncate_with_ellipsis(content: &str, max: usize) -> String {
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = content.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
