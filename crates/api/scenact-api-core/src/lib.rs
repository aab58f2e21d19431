//! Scenact API core: shared contracts between the action engine and hosts.
//!
//! This crate defines the target capability surface (named mutable scalar
//! properties on a scene node), the small value types actions interpolate,
//! and the error taxonomy. It deliberately knows nothing about scene-graph
//! widgets, rendering, or input dispatch; hosts adapt their own node types
//! by implementing [`Target`].

pub mod error;
pub mod property;
pub mod target;
pub mod value;

pub use error::{ActionError, ScriptError};
pub use property::PropertyKey;
pub use target::{InputSource, SceneNode, Target};
pub use value::Vec2;
