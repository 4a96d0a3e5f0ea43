//! Validated YouTube video identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extract::ExtractError;

/// Fixed length of a YouTube video identifier.
pub const VIDEO_ID_LEN: usize = 11;

/// A canonical 11-character YouTube video identifier.
///
/// The invariant (exactly 11 characters of ASCII alphanumerics, `-` or `_`)
/// is enforced at construction; any `VideoId` in circulation is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Validate a candidate string and wrap it.
    pub fn parse(s: &str) -> Result<Self, ExtractError> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ExtractError::MalformedId(s.to_string()))
        }
    }

    /// Check whether a string satisfies the identifier invariant.
    pub fn is_valid(s: &str) -> bool {
        s.len() == VIDEO_ID_LEN
            && s.bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
