//! Named mutable scalar properties a target exposes to the engine.
//!
//! The fixed keys cover the property surface tweens act on (position,
//! scale, rotation, origin, and the drawable shift pair); `Custom` carries
//! any additional host-defined scalar by name.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKey {
    X,
    Y,
    ScaleX,
    ScaleY,
    Rotation,
    OriginX,
    OriginY,
    ShiftX,
    ShiftY,
    Custom(String),
}

impl PropertyKey {
    /// Host-defined scalar property addressed by name.
    pub fn custom(name: impl Into<String>) -> Self {
        PropertyKey::Custom(name.into())
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::X => write!(f, "x"),
            PropertyKey::Y => write!(f, "y"),
            PropertyKey::ScaleX => write!(f, "scaleX"),
            PropertyKey::ScaleY => write!(f, "scaleY"),
            PropertyKey::Rotation => write!(f, "rotation"),
            PropertyKey::OriginX => write!(f, "originX"),
            PropertyKey::OriginY => write!(f, "originY"),
            PropertyKey::ShiftX => write!(f, "shiftX"),
            PropertyKey::ShiftY => write!(f, "shiftY"),
            PropertyKey::Custom(name) => write!(f, "{name}"),
        }
    }
}
