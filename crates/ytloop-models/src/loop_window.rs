//! Loop-window normalization.
//!
//! A [`LoopWindow`] holds the raw bounds exactly as the user set them;
//! swapped or out-of-range values are tolerated and fixed up by
//! [`LoopWindow::clamp`], which produces the normalized [`LoopSpan`]
//! the sampler actually compares against.

use serde::{Deserialize, Serialize};

/// Raw user-configured loop bounds in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoopWindow {
    pub start: f64,
    pub end: f64,
}

impl LoopWindow {
    /// Window with the given raw bounds.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Window spanning a whole video.
    pub fn full(duration: f64) -> Self {
        Self {
            start: 0.0,
            end: duration.max(0.0),
        }
    }

    /// Empty window; loops nothing.
    pub fn empty() -> Self {
        Self {
            start: 0.0,
            end: 0.0,
        }
    }

    /// Normalize against a known duration.
    ///
    /// Both bounds are clamped to `[0, duration]` and reordered so that
    /// start <= end. Returns `None` when the duration is not positive or
    /// the normalized window is empty, the degenerate cases in which the
    /// sampler must never act.
    pub fn clamp(&self, duration: f64) -> Option<LoopSpan> {
        if !(duration > 0.0) {
            return None;
        }
        let a = self.start.clamp(0.0, duration);
        let b = self.end.clamp(0.0, duration);
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        if end > start {
            Some(LoopSpan { start, end })
        } else {
            None
        }
    }
}

/// A normalized, non-empty loop span: `0 <= start < end <= duration`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoopSpan {
    start: f64,
    end: f64,
}

impl LoopSpan {
    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Whether a playhead position has left the span and must be snapped
    /// back to the start.
    ///
    /// The epsilon pulls the end boundary in so that coarse polling cannot
    /// stall on the exact end timestamp.
    pub fn needs_reset(&self, position: f64, end_epsilon: f64) -> bool {
        position < self.start || position >= self.end - end_epsilon
    }
}
