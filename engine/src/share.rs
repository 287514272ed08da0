//! Share collaborator.
//!
//! Sharing hands the estimate summary to whatever the host offers. In a
//! terminal that is the system clipboard. Failure never reaches calculation
//! state: the caller logs it and moves on.

use thiserror::Error;
use tracing::debug;

/// Notice shown when the host has no way to share.
pub const SHARE_UNSUPPORTED_NOTICE: &str =
    "Sharing is not supported on this terminal. You can copy the estimate manually.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The host has no share capability at all.
    #[error("sharing is not supported")]
    Unsupported,
    /// The capability exists but this attempt failed.
    #[error("share failed: {0}")]
    Failed(String),
}

pub trait ShareTarget {
    /// Where a successful share went, for the confirmation notice.
    fn destination(&self) -> &'static str;

    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Shares by placing the estimate text on the system clipboard.
///
/// The clipboard handle is opened lazily and kept alive: on X11 the contents
/// vanish when the owning handle is dropped.
#[derive(Default)]
pub struct ClipboardShare {
    clipboard: Option<arboard::Clipboard>,
}

impl ClipboardShare {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShareTarget for ClipboardShare {
    fn destination(&self) -> &'static str {
        "the clipboard"
    }

    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
        if self.clipboard.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|err| {
                debug!("Clipboard unavailable: {err}");
                ShareError::Unsupported
            })?;
            self.clipboard = Some(clipboard);
        }
        let Some(clipboard) = self.clipboard.as_mut() else {
            return Err(ShareError::Unsupported);
        };

        clipboard
            .set_text(payload.text.clone())
            .map_err(|err| ShareError::Failed(err.to_string()))
    }
}

/// A host with no share capability.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShare;

impl ShareTarget for NoShare {
    fn destination(&self) -> &'static str {
        "nowhere"
    }

    fn share(&mut self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Unsupported)
    }
}
