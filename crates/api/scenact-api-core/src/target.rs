//! Target capability trait and the default scene-node property bag.
//!
//! The engine requires only get/set semantics per named property; hosts
//! with their own node types implement [`Target`] directly instead of
//! mirroring any widget hierarchy.

use hashbrown::HashMap;

use crate::property::PropertyKey;
use crate::value::Vec2;

/// Mutable named-scalar property surface the engine acts on.
///
/// Reads of unknown custom keys return 0.0; writes create them. All other
/// keys are always present.
pub trait Target {
    fn get(&self, key: &PropertyKey) -> f32;
    fn set(&mut self, key: &PropertyKey, value: f32);
}

/// Single-button input capability.
///
/// `take_press` drains one pending press: it returns true at most once per
/// physical press. The original gesture this abstracts is a pointer-button
/// click toggling pause.
pub trait InputSource {
    fn take_press(&mut self) -> bool;
}

/// Default [`Target`] implementation: a plain property bag with the fixed
/// scene-node scalars as fields and custom scalars in a map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneNode {
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
    pub origin: Vec2,
    pub shift: Vec2,
    custom: HashMap<String, f32>,
}

impl SceneNode {
    pub fn new() -> Self {
        Self {
            scale: Vec2::ONE,
            ..Self::default()
        }
    }

    pub fn custom_property(&self, name: &str) -> f32 {
        self.custom.get(name).copied().unwrap_or(0.0)
    }

    pub fn set_custom_property(&mut self, name: impl Into<String>, value: f32) {
        self.custom.insert(name.into(), value);
    }
}

impl Target for SceneNode {
    fn get(&self, key: &PropertyKey) -> f32 {
        match key {
            PropertyKey::X => self.position.x,
            PropertyKey::Y => self.position.y,
            PropertyKey::ScaleX => self.scale.x,
            PropertyKey::ScaleY => self.scale.y,
            PropertyKey::Rotation => self.rotation,
            PropertyKey::OriginX => self.origin.x,
            PropertyKey::OriginY => self.origin.y,
            PropertyKey::ShiftX => self.shift.x,
            PropertyKey::ShiftY => self.shift.y,
            PropertyKey::Custom(name) => self.custom_property(name),
        }
    }

    fn set(&mut self, key: &PropertyKey, value: f32) {
        match key {
            PropertyKey::X => self.position.x = value,
            PropertyKey::Y => self.position.y = value,
            PropertyKey::ScaleX => self.scale.x = value,
            PropertyKey::ScaleY => self.scale.y = value,
            PropertyKey::Rotation => self.rotation = value,
            PropertyKey::OriginX => self.origin.x = value,
            PropertyKey::OriginY => self.origin.y = value,
            PropertyKey::ShiftX => self.shift.x = value,
            PropertyKey::ShiftY => self.shift.y = value,
            PropertyKey::Custom(name) => {
                self.custom.insert(name.clone(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_properties_round_trip() {
        let mut node = SceneNode::new();
        node.set(&PropertyKey::X, 4.0);
        node.set(&PropertyKey::Rotation, 90.0);
        assert_eq!(node.get(&PropertyKey::X), 4.0);
        assert_eq!(node.get(&PropertyKey::Rotation), 90.0);
        assert_eq!(node.position.x, 4.0);
        // Scale defaults to 1, not 0.
        assert_eq!(node.get(&PropertyKey::ScaleX), 1.0);
    }

    #[test]
    fn custom_properties_default_to_zero() {
        let mut node = SceneNode::new();
        let key = PropertyKey::custom("glow");
        assert_eq!(node.get(&key), 0.0);
        node.set(&key, 0.5);
        assert_eq!(node.get(&key), 0.5);
        assert_eq!(node.custom_property("glow"), 0.5);
    }
}
