//! Loop controller for the ytloop widget core.
//!
//! Drives one embedded player: discovers the video duration on a bounded
//! probe, runs the segment-loop sampler, reacts to end-of-video
//! notifications, and guarantees that switching or unloading a video
//! cancels every timer belonging to the old one.
//!
//! The embedding layer supplies a [`ytloop_player::PlayerHandle`] per
//! created player and forwards state-change notifications into
//! [`LoopEngine::on_player_state`]; everything else is internal.

pub mod config;
pub mod duration;
pub mod error;
pub mod poll;
pub mod session;

mod sampler;
mod task;

// Re-export common types
pub use config::EngineConfig;
pub use duration::DurationOutcome;
pub use error::{EngineError, EngineResult};
pub use poll::{poll_until, PollConfig, PollOutcome};
pub use session::{LoopEngine, LoopStatus, SessionState};
