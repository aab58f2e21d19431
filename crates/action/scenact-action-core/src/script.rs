//! Declarative action scripts: a data-only JSON mirror of the action tree.
//!
//! Scripts carry no runtime state and no custom leaves; they describe the
//! same trees the [`crate::act`] builders produce and validate the same
//! arguments when built. The JSON shape is a tagged enum:
//!
//! ```json
//! {
//!   "type": "sequence",
//!   "children": [
//!     { "type": "moveBy", "dx": -10.0, "dy": 10.0 },
//!     { "type": "rotateBy", "degrees": 20.0, "duration": 8.0,
//!       "ease": { "powOut": 3 } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use scenact_api_core::{ActionError, PropertyKey, ScriptError};

use crate::act;
use crate::action::{Action, TimeFactor};
use crate::ease::Ease;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ActionSpec {
    MoveTo {
        x: f32,
        y: f32,
        #[serde(default)]
        duration: f32,
        #[serde(default)]
        ease: Ease,
    },
    MoveBy {
        dx: f32,
        dy: f32,
        #[serde(default)]
        duration: f32,
        #[serde(default)]
        ease: Ease,
    },
    ScaleTo {
        sx: f32,
        sy: f32,
        #[serde(default)]
        duration: f32,
        #[serde(default)]
        ease: Ease,
    },
    RotateTo {
        degrees: f32,
        #[serde(default)]
        duration: f32,
        #[serde(default)]
        ease: Ease,
    },
    RotateBy {
        degrees: f32,
        #[serde(default)]
        duration: f32,
        #[serde(default)]
        ease: Ease,
    },
    ShiftBy {
        dx: f32,
        dy: f32,
        #[serde(default)]
        duration: f32,
        #[serde(default)]
        ease: Ease,
    },
    OriginTo {
        x: f32,
        y: f32,
        #[serde(default)]
        duration: f32,
        #[serde(default)]
        ease: Ease,
    },
    PropertyTo {
        key: PropertyKey,
        value: f32,
        #[serde(default)]
        duration: f32,
        #[serde(default)]
        ease: Ease,
    },
    Delay {
        duration: f32,
    },
    Sequence {
        children: Vec<ActionSpec>,
    },
    Parallel {
        children: Vec<ActionSpec>,
    },
    Forever {
        child: Box<ActionSpec>,
    },
    TimeScale {
        #[serde(default = "default_factor")]
        factor: f32,
        child: Box<ActionSpec>,
    },
}

fn default_factor() -> f32 {
    1.0
}

impl ActionSpec {
    /// Build the runnable action tree, validating durations and factors.
    ///
    /// A `TimeScale` node builds its own internal [`TimeFactor`]; scripts
    /// that need a live pause handle wrap the built tree with
    /// [`act::time_scale`] instead.
    pub fn build(&self) -> Result<Action, ActionError> {
        match self {
            ActionSpec::MoveTo {
                x,
                y,
                duration,
                ease,
            } => act::move_to(*x, *y, *duration, *ease),
            ActionSpec::MoveBy {
                dx,
                dy,
                duration,
                ease,
            } => act::move_by(*dx, *dy, *duration, *ease),
            ActionSpec::ScaleTo {
                sx,
                sy,
                duration,
                ease,
            } => act::scale_to(*sx, *sy, *duration, *ease),
            ActionSpec::RotateTo {
                degrees,
                duration,
                ease,
            } => act::rotate_to(*degrees, *duration, *ease),
            ActionSpec::RotateBy {
                degrees,
                duration,
                ease,
            } => act::rotate_by(*degrees, *duration, *ease),
            ActionSpec::ShiftBy {
                dx,
                dy,
                duration,
                ease,
            } => act::shift_by(*dx, *dy, *duration, *ease),
            ActionSpec::OriginTo {
                x,
                y,
                duration,
                ease,
            } => act::origin_to(*x, *y, *duration, *ease),
            ActionSpec::PropertyTo {
                key,
                value,
                duration,
                ease,
            } => act::property_to(key.clone(), *value, *duration, *ease),
            ActionSpec::Delay { duration } => act::delay(*duration),
            ActionSpec::Sequence { children } => {
                let built: Result<Vec<_>, _> = children.iter().map(ActionSpec::build).collect();
                Ok(act::sequence(built?))
            }
            ActionSpec::Parallel { children } => {
                let built: Result<Vec<_>, _> = children.iter().map(ActionSpec::build).collect();
                Ok(act::parallel(built?))
            }
            ActionSpec::Forever { child } => Ok(act::forever(child.build()?)),
            ActionSpec::TimeScale { factor, child } => {
                let factor = TimeFactor::new(*factor)?;
                Ok(act::time_scale_with(child.build()?, factor))
            }
        }
    }
}

/// Parse an action script from its JSON text form.
pub fn parse_action_script_json(json: &str) -> Result<ActionSpec, ScriptError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a script and build the runnable tree in one step.
pub fn load_action_script(json: &str) -> Result<Action, ScriptError> {
    let spec = parse_action_script_json(json)?;
    Ok(spec.build()?)
}
