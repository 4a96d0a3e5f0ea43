//! Engine error types.

use thiserror::Error;

use ytloop_models::ExtractError;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors the engine surfaces to its caller.
///
/// Player-call failures never appear here: they are swallowed inside the
/// timer loops, which self-correct on the next tick.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The submitted input did not resolve to a video id. Surfaced to the
    /// user verbatim; the current session, if any, is left untouched.
    #[error("could not resolve a video from input: {0}")]
    Parse(#[from] ExtractError),
}
