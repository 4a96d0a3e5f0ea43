//! Shared data models for the ytloop widget core.
//!
//! This crate provides the pure, side-effect-free half of the system:
//! - Validated YouTube video identifiers
//! - URL/ID extraction from free-form user input
//! - Link analysis (classification, canonical watch URL, embed URL)
//! - Loop-window normalization and the loop boundary predicate
//! - Clock-style timestamp formatting for the loop readout

pub mod extract;
pub mod link;
pub mod loop_window;
pub mod timestamp;
pub mod video_id;

// Re-export common types
pub use extract::{extract, ExtractError, ExtractResult};
pub use link::{LinkForm, VideoLink};
pub use loop_window::{LoopSpan, LoopWindow};
pub use timestamp::{format_clock, parse_clock, ClockError};
pub use video_id::{VideoId, VIDEO_ID_LEN};
