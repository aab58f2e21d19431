//! Pause control over a shared time factor.
//!
//! The reference gesture: a pointer-button press toggles the scene
//! animation between frozen (factor 0) and normal speed (factor 1).

use scenact_api_core::InputSource;

use crate::action::TimeFactor;

#[derive(Clone, Debug)]
pub struct PauseToggle {
    factor: TimeFactor,
    paused: bool,
}

impl PauseToggle {
    pub fn new(factor: TimeFactor) -> Self {
        Self {
            factor,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip between frozen and normal speed.
    pub fn toggle(&mut self) {
        self.paused = !self.paused;
        // Both 0.0 and 1.0 are valid factors; set cannot fail here.
        let _ = self.factor.set(if self.paused { 0.0 } else { 1.0 });
    }

    /// Drain pending presses from an input source, toggling once per press.
    pub fn update(&mut self, input: &mut dyn InputSource) {
        while input.take_press() {
            self.toggle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PressQueue(u32);

    impl InputSource for PressQueue {
        fn take_press(&mut self) -> bool {
            if self.0 > 0 {
                self.0 -= 1;
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn toggle_flips_factor_between_zero_and_one() {
        let factor = TimeFactor::default();
        let mut pause = PauseToggle::new(factor.clone());
        assert!(!pause.is_paused());
        pause.toggle();
        assert!(pause.is_paused());
        assert_eq!(factor.get(), 0.0);
        pause.toggle();
        assert_eq!(factor.get(), 1.0);
    }

    #[test]
    fn update_consumes_every_pending_press() {
        let factor = TimeFactor::default();
        let mut pause = PauseToggle::new(factor.clone());
        let mut input = PressQueue(3);
        pause.update(&mut input);
        // Odd number of presses leaves the scene paused.
        assert!(pause.is_paused());
        assert_eq!(factor.get(), 0.0);
    }
}
