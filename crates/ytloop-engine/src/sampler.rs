//! The segment-loop sampler.
//!
//! One sampler runs per eligible session. Each tick it reads the
//! playhead, re-derives the effective loop span from the stored bounds,
//! and snaps playback to the span start when the playhead has escaped.
//! Every player call is best-effort; a failed tick is skipped, not
//! retried, and the next tick self-corrects.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, trace};

use ytloop_models::{LoopWindow, VideoId};
use ytloop_player::PlayerHandle;

pub(crate) async fn run(
    player: Arc<dyn PlayerHandle>,
    video_id: VideoId,
    window: LoopWindow,
    duration: f64,
    tick: Duration,
    end_epsilon: f64,
) {
    let mut ticker = interval(tick);

    loop {
        ticker.tick().await;

        // Clamp and reorder the raw bounds before every comparison.
        let Some(span) = window.clamp(duration) else {
            continue;
        };

        let position = match player.current_time().await {
            Ok(position) => position,
            Err(error) if error.is_permanent() => {
                debug!(video_id = %video_id, error = %error, "sampler tick skipped");
                continue;
            }
            Err(error) => {
                trace!(video_id = %video_id, error = %error, "sampler tick skipped");
                continue;
            }
        };

        if !span.needs_reset(position, end_epsilon) {
            continue;
        }

        // At most one seek per tick.
        match player.seek_to(span.start(), true).await {
            Ok(()) => {
                trace!(
                    video_id = %video_id,
                    from = position,
                    to = span.start(),
                    "looped back to segment start"
                );
            }
            Err(error) => {
                debug!(video_id = %video_id, error = %error, "loop seek failed");
            }
        }
    }
}
