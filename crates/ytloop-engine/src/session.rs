//! The playback session state machine and the public engine surface.
//!
//! One engine drives one widget. Loading a video creates a session that
//! exclusively owns the loop timers for that video; loading another video
//! or tearing down cancels them before anything else happens, so no timer
//! can ever act on a stale player handle.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, info, warn};

use ytloop_models::{format_clock, LoopWindow, VideoId, VideoLink};
use ytloop_player::{PlaybackState, PlayerHandle};

use crate::config::EngineConfig;
use crate::duration::{probe_duration, DurationOutcome};
use crate::error::EngineResult;
use crate::sampler;
use crate::task::TaskGuard;

/// Lifecycle of the currently loaded video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No video loaded
    Idle,
    /// Video loaded, duration discovery in flight
    Loading,
    /// Duration discovery finished, no sampler running
    Ready,
    /// Segment sampler active
    Looping,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Loading => "loading",
            SessionState::Ready => "ready",
            SessionState::Looping => "looping",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of the loop state for the widget readout.
#[derive(Debug, Clone, Serialize)]
pub struct LoopStatus {
    pub video_id: VideoId,
    pub state: SessionState,
    pub loop_enabled: bool,
    /// Discovered duration; `None` while loading or after discovery
    /// timed out
    pub duration_secs: Option<f64>,
    /// Raw window bounds as configured
    pub window_start_secs: f64,
    pub window_end_secs: f64,
    /// Human-readable `minutes:seconds` readout of the effective window
    pub readout: String,
}

impl LoopStatus {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Per-video state. Owns the timers; dropping it cancels them.
struct Session {
    link: VideoLink,
    player: Arc<dyn PlayerHandle>,
    duration: Option<DurationOutcome>,
    window: LoopWindow,
    loop_enabled: bool,
    probe: Option<TaskGuard>,
    sampler: Option<TaskGuard>,
}

impl Session {
    fn state(&self) -> SessionState {
        if self.duration.is_none() {
            SessionState::Loading
        } else if self.sampler.is_some() {
            SessionState::Looping
        } else {
            SessionState::Ready
        }
    }

    /// Cancel the running sampler and start a fresh one if the session is
    /// eligible: looping enabled, duration known, window non-degenerate.
    ///
    /// Called on every input change, so at most one sampler instance is
    /// ever alive for a session.
    fn restart_sampler(&mut self, config: &EngineConfig) {
        self.sampler = None;

        if !self.loop_enabled {
            return;
        }
        let Some(DurationOutcome::Known(duration)) = self.duration else {
            return;
        };
        if self.window.clamp(duration).is_none() {
            return;
        }

        self.sampler = Some(TaskGuard::spawn(sampler::run(
            Arc::clone(&self.player),
            self.link.video_id.clone(),
            self.window,
            duration,
            config.sample_interval,
            config.end_epsilon_secs,
        )));
        debug!(video_id = %self.link.video_id, "segment sampler started");
    }
}

struct Shared {
    /// Bumped on every load/teardown; stale probe completions check it
    /// and discard themselves.
    epoch: u64,
    session: Option<Session>,
}

/// The loop controller driving one embedded player.
pub struct LoopEngine {
    config: EngineConfig,
    shared: Arc<Mutex<Shared>>,
}

impl Default for LoopEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl LoopEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            shared: Arc::new(Mutex::new(Shared {
                epoch: 0,
                session: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state of the lifecycle machine.
    pub fn state(&self) -> SessionState {
        match self.lock().session.as_ref() {
            None => SessionState::Idle,
            Some(session) => session.state(),
        }
    }

    /// Load a video from a raw URL-or-id submission.
    ///
    /// On success the previous session (if any) is fully torn down first
    /// and duration discovery starts in the background; the returned link
    /// carries the embed URL for the iframe. On a parse failure the
    /// current session keeps playing untouched.
    ///
    /// The player handle is the freshly created player for this video;
    /// the engine takes over all command traffic to it from here on.
    pub async fn load(
        &mut self,
        input: &str,
        player: Arc<dyn PlayerHandle>,
    ) -> EngineResult<VideoLink> {
        let link = VideoLink::analyze(input)?;
        info!(video_id = %link.video_id, form = %link.form, "loading video");

        // Cancel the previous session's timers before the new player sees
        // any commands. The enabled flag is page-level state and survives
        // across videos.
        let loop_enabled = {
            let mut shared = self.lock();
            shared.epoch += 1;
            shared
                .session
                .take()
                .map(|session| session.loop_enabled)
                .unwrap_or(true)
        };

        if self.config.autoplay_muted {
            if let Err(error) = player.mute().await {
                debug!(video_id = %link.video_id, error = %error, "mute on load failed");
            }
            if let Err(error) = player.play().await {
                debug!(video_id = %link.video_id, error = %error, "autoplay on load failed");
            }
        }

        let epoch = {
            let mut shared = self.lock();
            shared.session = Some(Session {
                link: link.clone(),
                player: Arc::clone(&player),
                duration: None,
                window: LoopWindow::empty(),
                loop_enabled,
                probe: None,
                sampler: None,
            });
            shared.epoch
        };

        let probe = TaskGuard::spawn(run_probe(
            Arc::clone(&self.shared),
            player,
            self.config.clone(),
            epoch,
        ));
        {
            let mut shared = self.lock();
            if let Some(session) = shared.session.as_mut() {
                session.probe = Some(probe);
            }
        }

        Ok(link)
    }

    /// Update the loop window with raw slider values. Swapped or
    /// out-of-range bounds are tolerated; the sampler normalizes them on
    /// every tick.
    pub fn set_window(&mut self, start: f64, end: f64) {
        let mut shared = self.lock();
        let Some(session) = shared.session.as_mut() else {
            debug!("window update ignored, no video loaded");
            return;
        };
        session.window = LoopWindow::new(start, end);
        debug!(video_id = %session.link.video_id, start, end, "loop window updated");
        session.restart_sampler(&self.config);
    }

    /// Enable or disable looping.
    pub fn set_loop_enabled(&mut self, enabled: bool) {
        let mut shared = self.lock();
        let Some(session) = shared.session.as_mut() else {
            return;
        };
        session.loop_enabled = enabled;
        debug!(video_id = %session.link.video_id, enabled, "loop flag changed");
        session.restart_sampler(&self.config);
    }

    /// Flip the loop flag; returns the new value (false when idle).
    pub fn toggle_loop(&mut self) -> bool {
        let mut shared = self.lock();
        let Some(session) = shared.session.as_mut() else {
            return false;
        };
        session.loop_enabled = !session.loop_enabled;
        let enabled = session.loop_enabled;
        debug!(video_id = %session.link.video_id, enabled, "loop flag toggled");
        session.restart_sampler(&self.config);
        enabled
    }

    /// Feed a player state-change notification into the engine.
    ///
    /// Whole-video loop mode: when looping is enabled and the player
    /// reports the video ended, snap back to the effective loop start and
    /// resume playback. Best-effort like every player interaction.
    pub async fn on_player_state(&self, state: PlaybackState) {
        if !state.is_ended() {
            return;
        }

        let (player, video_id, start) = {
            let shared = self.lock();
            let Some(session) = shared.session.as_ref() else {
                return;
            };
            if !session.loop_enabled {
                return;
            }
            let start = session
                .duration
                .and_then(|outcome| outcome.seconds())
                .and_then(|duration| session.window.clamp(duration))
                .map(|span| span.start())
                .unwrap_or(0.0);
            (
                Arc::clone(&session.player),
                session.link.video_id.clone(),
                start,
            )
        };

        if let Err(error) = player.seek_to(start, true).await {
            debug!(video_id = %video_id, error = %error, "restart seek failed");
            return;
        }
        if let Err(error) = player.play().await {
            debug!(video_id = %video_id, error = %error, "restart play failed");
        }
        debug!(video_id = %video_id, start, "video ended, restarted from loop start");
    }

    /// Snapshot for the widget readout; `None` while idle.
    pub fn status(&self) -> Option<LoopStatus> {
        let shared = self.lock();
        let session = shared.session.as_ref()?;

        let duration_secs = session.duration.and_then(|outcome| outcome.seconds());
        let readout = match duration_secs {
            Some(duration) => {
                let (lo, hi) = match session.window.clamp(duration) {
                    Some(span) => (span.start(), span.end()),
                    None => (0.0, 0.0),
                };
                format!(
                    "{} to {} (total {})",
                    format_clock(lo),
                    format_clock(hi),
                    format_clock(duration)
                )
            }
            None => format!(
                "{} to {}",
                format_clock(session.window.start),
                format_clock(session.window.end)
            ),
        };

        Some(LoopStatus {
            video_id: session.link.video_id.clone(),
            state: session.state(),
            loop_enabled: session.loop_enabled,
            duration_secs,
            window_start_secs: session.window.start,
            window_end_secs: session.window.end,
            readout,
        })
    }

    /// Cancel all session timers and hand the player handle back.
    ///
    /// After this returns no engine-originated call can reach the player
    /// again; the caller is free to destroy it.
    pub fn teardown(&mut self) -> Option<Arc<dyn PlayerHandle>> {
        let mut session = {
            let mut shared = self.lock();
            shared.epoch += 1;
            shared.session.take()?
        };

        if let Some(probe) = session.probe.take() {
            probe.cancel();
        }
        if let Some(sampler) = session.sampler.take() {
            sampler.cancel();
        }
        info!(video_id = %session.link.video_id, "session torn down");
        Some(session.player)
    }
}

/// Background half of duration discovery: run the bounded probe, then
/// apply the outcome to the session that started it, unless the world
/// moved on in the meantime.
async fn run_probe(
    shared: Arc<Mutex<Shared>>,
    player: Arc<dyn PlayerHandle>,
    config: EngineConfig,
    epoch: u64,
) {
    let outcome = probe_duration(player, &config).await;

    let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
    if guard.epoch != epoch {
        debug!("stale duration probe discarded");
        return;
    }
    let Some(session) = guard.session.as_mut() else {
        return;
    };

    match outcome {
        DurationOutcome::Known(duration) => {
            info!(
                video_id = %session.link.video_id,
                duration_secs = duration,
                "duration discovered"
            );
            session.duration = Some(DurationOutcome::Known(duration));
            session.window = LoopWindow::full(duration);
            session.restart_sampler(&config);
        }
        DurationOutcome::Unknown => {
            warn!(
                video_id = %session.link.video_id,
                attempts = config.duration_poll_attempts,
                "duration discovery timed out, segment looping stays disabled"
            );
            session.duration = Some(DurationOutcome::Unknown);
            session.window = LoopWindow::empty();
        }
    }
}
