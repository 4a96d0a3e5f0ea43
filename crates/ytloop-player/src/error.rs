//! Player call errors.

use thiserror::Error;

/// Error for any call into the external player handle.
///
/// Every interaction with the player is best-effort: the engine swallows
/// these, logs at debug level, and lets the next timer tick try again.
#[derive(Debug, Clone, Error)]
pub enum PlayerError {
    /// The player exists but has not finished initializing.
    #[error("player is not ready: {0}")]
    NotReady(String),

    /// The handle points at a destroyed or replaced player.
    #[error("player handle is detached")]
    Detached,

    /// The underlying transport rejected or dropped the call.
    #[error("player call failed: {0}")]
    Call(String),
}

impl PlayerError {
    pub fn not_ready(msg: impl Into<String>) -> Self {
        Self::NotReady(msg.into())
    }

    pub fn call(msg: impl Into<String>) -> Self {
        Self::Call(msg.into())
    }

    /// Whether a later retry of the same call could succeed.
    ///
    /// Only a detached handle is final; the engine uses this to decide
    /// between debug and trace logging, never to stop ticking.
    pub fn is_permanent(&self) -> bool {
        matches!(self, PlayerError::Detached)
    }
}
