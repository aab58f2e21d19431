//! Error taxonomy for the action engine.
//!
//! Invalid arguments surface synchronously at the call that introduced
//! them. Everything else (advancing a complete action, clearing a target
//! with nothing attached, detaching an unknown id) is a no-op, not an
//! error.

use thiserror::Error;

/// Invalid-argument conditions raised by action constructors and controls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("action duration must be non-negative, got {0}")]
    NegativeDuration(f32),
    #[error("time factor must be non-negative, got {0}")]
    NegativeTimeFactor(f32),
}

/// Errors produced while loading an action script from JSON.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("action script parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid action script: {0}")]
    Invalid(#[from] ActionError),
}
