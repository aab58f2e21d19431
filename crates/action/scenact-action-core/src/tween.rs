//! Leaf tween: one interpolated mutation of target properties over a
//! fixed duration.
//!
//! Absolute kinds (`MoveTo`, `ScaleTo`, ...) capture the target's start
//! values on the first advance and blend start -> end by eased progress.
//! Relative kinds (`MoveBy`, `RotateBy`, `ShiftBy`) apply incremental
//! deltas `amount * (eased - prev_eased)` so that concurrent relative
//! tweens on the same property compose additively.

use scenact_api_core::{ActionError, PropertyKey, Target, Vec2};

use crate::action::Step;
use crate::ease::{lerp, Ease};

/// What a leaf tween does to its target.
#[derive(Clone, Debug, PartialEq)]
pub enum TweenKind {
    MoveTo(Vec2),
    MoveBy(Vec2),
    ScaleTo(Vec2),
    RotateTo(f32),
    RotateBy(f32),
    ShiftBy(Vec2),
    OriginTo(Vec2),
    PropertyTo { key: PropertyKey, value: f32 },
    /// No property mutation; occupies time in a sequence.
    Delay,
}

/// One animated property channel of a tween.
#[derive(Clone, Debug)]
struct Channel {
    key: PropertyKey,
    /// End value for absolute kinds, total delta for relative kinds.
    amount: f32,
    /// Start value captured on the first advance (absolute kinds only).
    start: f32,
}

#[derive(Clone, Debug)]
pub struct Tween {
    channels: Vec<Channel>,
    relative: bool,
    duration: f32,
    ease: Ease,
    elapsed: f32,
    begun: bool,
    complete: bool,
    prev_eased: f32,
}

impl Tween {
    /// Build a tween. Fails with [`ActionError::NegativeDuration`] when
    /// `duration < 0`; a zero duration applies the end value exactly once
    /// on the first advance and completes.
    pub fn new(kind: TweenKind, duration: f32, ease: Ease) -> Result<Self, ActionError> {
        if duration < 0.0 {
            return Err(ActionError::NegativeDuration(duration));
        }
        let (channels, relative) = Self::channels_for(kind);
        Ok(Self {
            channels,
            relative,
            duration,
            ease,
            elapsed: 0.0,
            begun: false,
            complete: false,
            prev_eased: 0.0,
        })
    }

    fn channels_for(kind: TweenKind) -> (Vec<Channel>, bool) {
        let pair = |a: PropertyKey, b: PropertyKey, v: Vec2| {
            vec![
                Channel {
                    key: a,
                    amount: v.x,
                    start: 0.0,
                },
                Channel {
                    key: b,
                    amount: v.y,
                    start: 0.0,
                },
            ]
        };
        let single = |key: PropertyKey, amount: f32| {
            vec![Channel {
                key,
                amount,
                start: 0.0,
            }]
        };
        match kind {
            TweenKind::MoveTo(v) => (pair(PropertyKey::X, PropertyKey::Y, v), false),
            TweenKind::MoveBy(v) => (pair(PropertyKey::X, PropertyKey::Y, v), true),
            TweenKind::ScaleTo(v) => (pair(PropertyKey::ScaleX, PropertyKey::ScaleY, v), false),
            TweenKind::RotateTo(deg) => (single(PropertyKey::Rotation, deg), false),
            TweenKind::RotateBy(deg) => (single(PropertyKey::Rotation, deg), true),
            TweenKind::ShiftBy(v) => (pair(PropertyKey::ShiftX, PropertyKey::ShiftY, v), true),
            TweenKind::OriginTo(v) => (pair(PropertyKey::OriginX, PropertyKey::OriginY, v), false),
            TweenKind::PropertyTo { key, value } => (single(key, value), false),
            TweenKind::Delay => (Vec::new(), false),
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Capture start values for absolute channels.
    fn begin(&mut self, target: &dyn Target) {
        if !self.relative {
            for ch in &mut self.channels {
                ch.start = target.get(&ch.key);
            }
        }
        self.begun = true;
    }

    fn apply(&mut self, target: &mut dyn Target, eased: f32) {
        if self.relative {
            let delta = eased - self.prev_eased;
            for ch in &self.channels {
                let current = target.get(&ch.key);
                target.set(&ch.key, current + ch.amount * delta);
            }
        } else {
            for ch in &self.channels {
                target.set(&ch.key, lerp(ch.start, ch.amount, eased));
            }
        }
        self.prev_eased = eased;
    }

    /// Advance by `dt`, mutating the target. A complete tween never
    /// touches the target again.
    pub(crate) fn step(&mut self, target: &mut dyn Target, dt: f32) -> Step {
        if self.complete {
            return Step::Complete { leftover: dt };
        }
        if !self.begun {
            self.begin(target);
        }
        if self.duration <= 0.0 {
            self.apply(target, self.ease.apply(1.0));
            self.complete = true;
            return Step::Complete { leftover: dt };
        }
        let remaining = self.duration - self.elapsed;
        // Elapsed never exceeds duration.
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let progress = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.apply(target, self.ease.apply(progress));
        if self.elapsed >= self.duration {
            self.complete = true;
            Step::Complete {
                leftover: (dt - remaining).max(0.0),
            }
        } else {
            Step::Running
        }
    }

    /// Reset to the not-started state; start values are recaptured on the
    /// next advance.
    pub(crate) fn restart(&mut self) {
        self.elapsed = 0.0;
        self.begun = false;
        self.complete = false;
        self.prev_eased = 0.0;
    }
}
