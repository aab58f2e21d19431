//! Builder functions for scripting action trees.
//!
//! The vocabulary mirrors how behaviors are composed in practice:
//!
//! ```
//! use scenact_action_core::{act, Ease};
//!
//! let bob = act::forever(act::sequence(vec![
//!     act::move_by(20.0, 10.0, 0.8, Ease::SineInOut).unwrap(),
//!     act::move_by(-20.0, -10.0, 0.8, Ease::SineInOut).unwrap(),
//! ]));
//! ```

use scenact_api_core::{ActionError, PropertyKey, Target, Vec2};

use crate::action::{
    custom_from_fn, Action, CustomAction, Parallel, Repeat, Sequence, TimeFactor, TimeScale,
};
use crate::ease::Ease;
use crate::tween::{Tween, TweenKind};

fn tween(kind: TweenKind, duration: f32, ease: Ease) -> Result<Action, ActionError> {
    Ok(Action::Tween(Tween::new(kind, duration, ease)?))
}

/// Animate position to an absolute point.
pub fn move_to(x: f32, y: f32, duration: f32, ease: Ease) -> Result<Action, ActionError> {
    tween(TweenKind::MoveTo(Vec2::new(x, y)), duration, ease)
}

/// Offset position by a relative amount.
pub fn move_by(dx: f32, dy: f32, duration: f32, ease: Ease) -> Result<Action, ActionError> {
    tween(TweenKind::MoveBy(Vec2::new(dx, dy)), duration, ease)
}

/// Animate scale to absolute factors. A zero duration applies them
/// immediately on the first tick.
pub fn scale_to(sx: f32, sy: f32, duration: f32, ease: Ease) -> Result<Action, ActionError> {
    tween(TweenKind::ScaleTo(Vec2::new(sx, sy)), duration, ease)
}

/// Animate rotation to an absolute angle in degrees.
pub fn rotate_to(degrees: f32, duration: f32, ease: Ease) -> Result<Action, ActionError> {
    tween(TweenKind::RotateTo(degrees), duration, ease)
}

/// Rotate by a relative amount in degrees.
pub fn rotate_by(degrees: f32, duration: f32, ease: Ease) -> Result<Action, ActionError> {
    tween(TweenKind::RotateBy(degrees), duration, ease)
}

/// Offset the drawable shift pair by a relative amount.
pub fn shift_by(dx: f32, dy: f32, duration: f32, ease: Ease) -> Result<Action, ActionError> {
    tween(TweenKind::ShiftBy(Vec2::new(dx, dy)), duration, ease)
}

/// Animate the transform origin to an absolute point.
pub fn origin_to(x: f32, y: f32, duration: f32, ease: Ease) -> Result<Action, ActionError> {
    tween(TweenKind::OriginTo(Vec2::new(x, y)), duration, ease)
}

/// Animate a single named property to an absolute value.
pub fn property_to(
    key: PropertyKey,
    value: f32,
    duration: f32,
    ease: Ease,
) -> Result<Action, ActionError> {
    tween(TweenKind::PropertyTo { key, value }, duration, ease)
}

/// Occupy time without mutating the target.
pub fn delay(duration: f32) -> Result<Action, ActionError> {
    tween(TweenKind::Delay, duration, Ease::Linear)
}

/// Run children in order; each child hands leftover tick time to the next.
pub fn sequence(children: Vec<Action>) -> Action {
    Action::Sequence(Sequence::new(children))
}

/// Run children concurrently within each tick; completes when all do.
pub fn parallel(children: Vec<Action>) -> Action {
    Action::Parallel(Parallel::new(children))
}

/// Restart `child` each time it completes; never completes on its own.
pub fn forever(child: Action) -> Action {
    Action::Repeat(Repeat::new(child))
}

/// Wrap `child` behind a fresh time factor (initially 1.0) and return the
/// shared handle for external control (pause / slow-motion).
pub fn time_scale(child: Action) -> (Action, TimeFactor) {
    let factor = TimeFactor::default();
    let action = Action::TimeScale(TimeScale::new(child, factor.clone()));
    (action, factor)
}

/// Wrap `child` behind an existing shared time factor.
pub fn time_scale_with(child: Action, factor: TimeFactor) -> Action {
    Action::TimeScale(TimeScale::new(child, factor))
}

/// Leaf action from a closure; the closure returns true while running.
/// Restart is a no-op; implement [`CustomAction`] directly for restartable
/// per-instance state.
pub fn custom<F>(f: F) -> Action
where
    F: FnMut(&mut dyn Target, f32) -> bool + 'static,
{
    Action::Custom(custom_from_fn(f))
}

/// Leaf action from a [`CustomAction`] implementation.
pub fn from_custom(action: impl CustomAction + 'static) -> Action {
    Action::Custom(Box::new(action))
}
