//! Playback states reported by the external player.

use serde::{Deserialize, Serialize};

/// Player state carried by a state-change notification.
///
/// Mirrors the YouTube iframe player's state set; [`PlaybackState::from_code`]
/// maps the raw numeric codes the JS API emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlaybackState {
    /// Map a raw iframe-API state code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Unstarted),
            0 => Some(Self::Ended),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            3 => Some(Self::Buffering),
            5 => Some(Self::Cued),
            _ => None,
        }
    }

    /// Whether this state marks the end of playback.
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }
}
