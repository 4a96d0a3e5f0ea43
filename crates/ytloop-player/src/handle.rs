//! The player handle trait.

use async_trait::async_trait;

use crate::error::PlayerError;

/// Narrow command/reading surface the loop engine needs from a player.
///
/// Implementations wrap whatever transport actually reaches the player
/// (a JS-API bridge into an embedded iframe, a test fake). Every method
/// is fallible; callers treat failures as transient and skip the tick.
///
/// Readings (`duration`, `current_time`) must not mutate player state.
/// Commands (`seek_to`, `play`, `mute`) are fire-and-forget: a returned
/// `Ok` means the command was accepted, not that playback already moved.
#[async_trait]
pub trait PlayerHandle: Send + Sync {
    /// Total video duration in seconds; `0.0` while still unknown.
    async fn duration(&self) -> Result<f64, PlayerError>;

    /// Current playhead position in seconds.
    async fn current_time(&self) -> Result<f64, PlayerError>;

    /// Seek to an absolute position. `allow_seek_ahead` forces buffering
    /// of not-yet-loaded ranges instead of snapping to the nearest
    /// buffered point.
    async fn seek_to(&self, seconds: f64, allow_seek_ahead: bool) -> Result<(), PlayerError>;

    /// Start or resume playback.
    async fn play(&self) -> Result<(), PlayerError>;

    /// Mute audio. Muted autoplay is the only autoplay browsers permit.
    async fn mute(&self) -> Result<(), PlayerError>;
}
