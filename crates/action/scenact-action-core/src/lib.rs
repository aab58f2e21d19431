//! Scenact Action Core (engine-agnostic)
//!
//! A timed action composition engine: trees of composable timed actions
//! (leaf property tweens, sequence, parallel, repeat-forever, custom
//! leaves) advanced once per frame tick against scene-node targets, with
//! runtime time-scaling (pause / slow-motion) and dynamic replacement of a
//! target's active trees.

pub mod act;
pub mod action;
pub mod ease;
pub mod ids;
pub mod pause;
pub mod script;
pub mod stage;
pub mod tween;

// Re-exports for consumers (adapters)
pub use action::{Action, CustomAction, Parallel, Repeat, Sequence, TimeFactor, TimeScale};
pub use ease::Ease;
pub use ids::{ActionId, TargetId};
pub use pause::PauseToggle;
pub use script::{load_action_script, parse_action_script_json, ActionSpec};
pub use stage::Stage;
pub use tween::{Tween, TweenKind};
pub use scenact_api_core::{
    ActionError, InputSource, PropertyKey, SceneNode, ScriptError, Target, Vec2,
};
