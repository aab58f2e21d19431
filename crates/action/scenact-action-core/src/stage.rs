//! Stage: per-frame driver owning targets and their root action trees.
//!
//! The host calls [`Stage::tick`] once per frame with the frame's elapsed
//! seconds. Roots advance in attachment order; a root whose tree completes
//! during a tick is discarded after that tick and never advanced again.
//! `clear_actions` is the interrupt/replace path: whatever property values
//! were last applied remain until something overwrites them.

use scenact_api_core::Target;

use crate::action::Action;
use crate::ids::{ActionId, IdAllocator, TargetId};

struct TargetEntry {
    id: TargetId,
    target: Box<dyn Target>,
}

struct RootEntry {
    id: ActionId,
    target: TargetId,
    action: Action,
}

/// Owns the registered targets and the set of active root action trees.
#[derive(Default)]
pub struct Stage {
    ids: IdAllocator,
    targets: Vec<TargetEntry>,
    roots: Vec<RootEntry>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target, transferring ownership to the stage. The host
    /// reads state back through [`Stage::target`] / [`Stage::target_mut`].
    pub fn add_target(&mut self, target: Box<dyn Target>) -> TargetId {
        let id = self.ids.alloc_target();
        self.targets.push(TargetEntry { id, target });
        log::debug!("stage: added target {id:?}");
        id
    }

    pub fn target(&self, id: TargetId) -> Option<&dyn Target> {
        self.targets
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.target.as_ref())
    }

    pub fn target_mut(&mut self, id: TargetId) -> Option<&mut (dyn Target + '_)> {
        match self.targets.iter_mut().find(|e| e.id == id) {
            Some(e) => Some(e.target.as_mut()),
            None => None,
        }
    }

    /// Unregister a target along with any actions still attached to it.
    pub fn remove_target(&mut self, id: TargetId) {
        self.clear_actions(id);
        self.targets.retain(|e| e.id != id);
    }

    /// Attach a root action tree to a target. Roots advance in attachment
    /// order within each tick.
    pub fn attach(&mut self, target: TargetId, action: Action) -> ActionId {
        let id = self.ids.alloc_action();
        self.roots.push(RootEntry { id, target, action });
        log::debug!("stage: attached action {id:?} to target {target:?}");
        id
    }

    /// Detach a single root (how a repeat-forever tree is stopped).
    /// Unknown ids are a no-op.
    pub fn detach(&mut self, action: ActionId) {
        self.roots.retain(|root| root.id != action);
    }

    /// Detach and discard every root attached to `target` immediately.
    /// No-op when nothing is attached.
    pub fn clear_actions(&mut self, target: TargetId) {
        let before = self.roots.len();
        self.roots.retain(|root| root.target != target);
        let removed = before - self.roots.len();
        if removed > 0 {
            log::debug!("stage: cleared {removed} action(s) from target {target:?}");
        }
    }

    /// Number of currently attached root trees.
    pub fn active_actions(&self) -> usize {
        self.roots.len()
    }

    /// Advance every root by `dt` seconds in attachment order, then drop
    /// the roots that completed. Negative deltas are treated as 0.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let targets = &mut self.targets;
        self.roots.retain_mut(|root| {
            let Some(entry) = targets.iter_mut().find(|e| e.id == root.target) else {
                // Target was removed out from under the root; drop the root.
                return false;
            };
            let running = root.action.advance(entry.target.as_mut(), dt);
            if !running {
                log::trace!("stage: action {:?} completed", root.id);
            }
            running
        });
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("targets", &self.targets.len())
            .field("roots", &self.roots.len())
            .finish()
    }
}
