//! Composable action trees: sequence, parallel, repeat-forever, and the
//! time-modulation wrapper.
//!
//! Stepping is internal and carries leftover time so that a child which
//! finishes mid-tick hands its surplus delta to whatever runs next (the
//! next sequence child, the restarted repeat child, the unscaled parent).
//! The public surface is [`Action::advance`] / [`Action::restart`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use scenact_api_core::{ActionError, Target};

use crate::tween::Tween;

/// Result of one internal stepping call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Step {
    Running,
    /// Finished during this call; `leftover` is the unconsumed part of the
    /// delta that was passed in.
    Complete { leftover: f32 },
}

/// Stateful leaf behavior with per-instance state that the built-in tween
/// kinds cannot express (e.g. a scrolling background that varies its own
/// speed and never completes).
pub trait CustomAction {
    /// Advance by `dt`; return true while still running.
    fn advance(&mut self, target: &mut dyn Target, dt: f32) -> bool;
    /// Reset to the initial state (drives repeat-forever).
    fn restart(&mut self) {}
}

/// Adapts an `FnMut` closure into a [`CustomAction`] with a no-op restart.
struct FnAction<F>(F);

impl<F> CustomAction for FnAction<F>
where
    F: FnMut(&mut dyn Target, f32) -> bool,
{
    fn advance(&mut self, target: &mut dyn Target, dt: f32) -> bool {
        (self.0)(target, dt)
    }
}

pub(crate) fn custom_from_fn<F>(f: F) -> Box<dyn CustomAction>
where
    F: FnMut(&mut dyn Target, f32) -> bool + 'static,
{
    Box::new(FnAction(f))
}

/// Shared, runtime-adjustable time-scale factor.
///
/// Cloning yields another handle to the same factor; the controller side
/// (e.g. a pause toggle) and the wrapped subtree observe the same value.
/// Last write wins; the engine is single-threaded by construction.
#[derive(Clone, Debug)]
pub struct TimeFactor(Rc<Cell<f32>>);

impl TimeFactor {
    /// Fails with [`ActionError::NegativeTimeFactor`] for negative input.
    pub fn new(factor: f32) -> Result<Self, ActionError> {
        if factor < 0.0 {
            return Err(ActionError::NegativeTimeFactor(factor));
        }
        Ok(Self(Rc::new(Cell::new(factor))))
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.0.get()
    }

    /// Set the factor. Negative input is rejected (not clamped) with
    /// [`ActionError::NegativeTimeFactor`]; 0 freezes the wrapped subtree.
    pub fn set(&self, factor: f32) -> Result<(), ActionError> {
        if factor < 0.0 {
            return Err(ActionError::NegativeTimeFactor(factor));
        }
        self.0.set(factor);
        Ok(())
    }
}

impl Default for TimeFactor {
    fn default() -> Self {
        Self(Rc::new(Cell::new(1.0)))
    }
}

/// Ordered children; exactly one child is active at a time. A child that
/// completes mid-tick hands leftover delta to its successor, so one large
/// delta may complete several children in a single call.
#[derive(Debug)]
pub struct Sequence {
    children: Vec<Action>,
    index: usize,
}

impl Sequence {
    pub fn new(children: Vec<Action>) -> Self {
        Self { children, index: 0 }
    }

    fn step(&mut self, target: &mut dyn Target, mut dt: f32) -> Step {
        if self.index >= self.children.len() {
            return Step::Complete { leftover: dt };
        }
        loop {
            match self.children[self.index].step(target, dt) {
                Step::Running => return Step::Running,
                Step::Complete { leftover } => {
                    self.index += 1;
                    if self.index == self.children.len() {
                        return Step::Complete { leftover };
                    }
                    dt = leftover;
                }
            }
        }
    }

    fn restart(&mut self) {
        self.index = 0;
        for child in &mut self.children {
            child.restart();
        }
    }
}

#[derive(Debug)]
struct ParallelSlot {
    action: Action,
    done: bool,
}

/// All children advance with the full delta every call; complete once all
/// children are complete. Children that finished earlier are skipped, so
/// re-advancing them never re-applies target state.
#[derive(Debug)]
pub struct Parallel {
    slots: Vec<ParallelSlot>,
}

impl Parallel {
    pub fn new(children: Vec<Action>) -> Self {
        Self {
            slots: children
                .into_iter()
                .map(|action| ParallelSlot {
                    action,
                    done: false,
                })
                .collect(),
        }
    }

    fn step(&mut self, target: &mut dyn Target, dt: f32) -> Step {
        let mut all_done = true;
        let mut min_leftover = dt;
        for slot in &mut self.slots {
            if slot.done {
                continue;
            }
            match slot.action.step(target, dt) {
                Step::Running => all_done = false,
                Step::Complete { leftover } => {
                    slot.done = true;
                    min_leftover = min_leftover.min(leftover);
                }
            }
        }
        if all_done {
            Step::Complete {
                leftover: min_leftover,
            }
        } else {
            Step::Running
        }
    }

    fn restart(&mut self) {
        for slot in &mut self.slots {
            slot.action.restart();
            slot.done = false;
        }
    }
}

/// Restarts its child on completion and keeps going with the leftover
/// delta. Never reports completion; the owner detaches it to stop it.
#[derive(Debug)]
pub struct Repeat {
    child: Box<Action>,
}

impl Repeat {
    pub fn new(child: Action) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    fn step(&mut self, target: &mut dyn Target, mut dt: f32) -> Step {
        loop {
            match self.child.step(target, dt) {
                Step::Running => return Step::Running,
                Step::Complete { leftover } => {
                    self.child.restart();
                    // A child that consumed no time (zero total duration)
                    // restarts once and waits for the next tick, keeping
                    // every tick finite.
                    if leftover <= 0.0 || leftover >= dt {
                        return Step::Running;
                    }
                    dt = leftover;
                }
            }
        }
    }

    fn restart(&mut self) {
        self.child.restart();
    }
}

/// Scales the delta fed into the wrapped subtree by a shared
/// [`TimeFactor`]. Factor 0 freezes the subtree; elapsed-time bookkeeping
/// lives in the children, so resuming continues exactly where it stopped.
#[derive(Debug)]
pub struct TimeScale {
    factor: TimeFactor,
    child: Box<Action>,
}

impl TimeScale {
    pub fn new(child: Action, factor: TimeFactor) -> Self {
        Self {
            factor,
            child: Box::new(child),
        }
    }

    /// Handle shared with the external controller.
    pub fn factor(&self) -> TimeFactor {
        self.factor.clone()
    }

    fn step(&mut self, target: &mut dyn Target, dt: f32) -> Step {
        let f = self.factor.get();
        if f == 0.0 {
            // Frozen: the subtree is not stepped at all.
            return Step::Running;
        }
        match self.child.step(target, dt * f) {
            Step::Running => Step::Running,
            Step::Complete { leftover } => Step::Complete {
                // Map leftover back into unscaled driver time.
                leftover: leftover / f,
            },
        }
    }

    fn restart(&mut self) {
        self.child.restart();
    }
}

/// A composable, steppable unit of timed behavior applied to a target.
pub enum Action {
    Tween(Tween),
    Sequence(Sequence),
    Parallel(Parallel),
    Repeat(Repeat),
    TimeScale(TimeScale),
    Custom(Box<dyn CustomAction>),
}

impl Action {
    /// Advance the tree by `dt` seconds against `target`; returns true
    /// while still running. Advancing an already-complete tree is a no-op.
    pub fn advance(&mut self, target: &mut dyn Target, dt: f32) -> bool {
        matches!(self.step(target, dt), Step::Running)
    }

    pub(crate) fn step(&mut self, target: &mut dyn Target, dt: f32) -> Step {
        match self {
            Action::Tween(t) => t.step(target, dt),
            Action::Sequence(s) => s.step(target, dt),
            Action::Parallel(p) => p.step(target, dt),
            Action::Repeat(r) => r.step(target, dt),
            Action::TimeScale(ts) => ts.step(target, dt),
            Action::Custom(c) => {
                if c.advance(target, dt) {
                    Step::Running
                } else {
                    Step::Complete { leftover: 0.0 }
                }
            }
        }
    }

    /// Reset the whole tree to its initial state.
    pub fn restart(&mut self) {
        match self {
            Action::Tween(t) => t.restart(),
            Action::Sequence(s) => s.restart(),
            Action::Parallel(p) => p.restart(),
            Action::Repeat(r) => r.restart(),
            Action::TimeScale(ts) => ts.restart(),
            Action::Custom(c) => c.restart(),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tween(t) => f.debug_tuple("Tween").field(t).finish(),
            Action::Sequence(s) => f.debug_tuple("Sequence").field(s).finish(),
            Action::Parallel(p) => f.debug_tuple("Parallel").field(p).finish(),
            Action::Repeat(r) => f.debug_tuple("Repeat").field(r).finish(),
            Action::TimeScale(ts) => f.debug_tuple("TimeScale").field(ts).finish(),
            Action::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
