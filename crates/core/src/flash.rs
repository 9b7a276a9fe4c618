//! One-shot flash message payload.
//!
//! A flash is set on a redirect response and consumed by the next page
//! render; the HTTP layer guarantees the "exactly one read" contract by
//! expiring the cookie when it renders the message. This module only defines
//! the payload and its URL-safe cookie encoding.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

/// Outcome category for a flash message, reflected in page styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

/// A transient confirmation or error indicator shown exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }

    /// Encode as a cookie-safe value: `<kind>:<percent-encoded text>`.
    pub fn encode(&self) -> String {
        format!(
            "{}:{}",
            self.kind.as_str(),
            utf8_percent_encode(&self.text, NON_ALPHANUMERIC)
        )
    }

    /// Decode a value produced by [`encode`](Self::encode).
    ///
    /// Returns `None` for malformed values (unknown kind, invalid UTF-8);
    /// a stale or tampered cookie simply renders no message.
    pub fn decode(value: &str) -> Option<Self> {
        let (kind, encoded) = value.split_once(':')?;
        let kind = match kind {
            "success" => FlashKind::Success,
            "error" => FlashKind::Error,
            _ => return None,
        };
        let text = percent_decode_str(encoded).decode_utf8().ok()?.into_owned();
        Some(Self { kind, text })
    }
}
