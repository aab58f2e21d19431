//! Easing functions mapping normalized progress to eased progress.
//!
//! - All variants are pure, stateless, and deterministic, so a single
//!   `Ease` value can be shared across any number of tweens.
//! - Endpoints are exact: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
//! - Elastic/back variants overshoot [0, 1] transiently by design.
//! - `Bezier` is a cubic-bezier timing curve (css-style control points),
//!   inverted on the time axis by binary search.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    Linear,
    /// `t^p` acceleration.
    PowIn(u32),
    /// Mirrored `t^p` deceleration.
    PowOut(u32),
    PowInOut(u32),
    SineIn,
    SineOut,
    SineInOut,
    /// Exponential acceleration with the given power (e.g. 5 or 10).
    ExpIn(u32),
    ExpOut(u32),
    ExpInOut(u32),
    ElasticIn,
    ElasticOut,
    BackIn,
    BackOut,
    /// Cubic-bezier timing with control points (x1, y1, x2, y2).
    Bezier([f32; 4]),
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Linear
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

const BACK_OVERSHOOT: f32 = 1.70158;
const ELASTIC_PERIOD: f32 = 0.3;

#[inline]
fn pow_in(t: f32, p: u32) -> f32 {
    t.powi(p as i32)
}

#[inline]
fn pow_out(t: f32, p: u32) -> f32 {
    1.0 - (1.0 - t).powi(p as i32)
}

/// Exponential ease-in normalized so the endpoints land exactly on 0 and 1.
#[inline]
fn exp_in(t: f32, p: u32) -> f32 {
    let p = p as f32;
    let min = 2f32.powf(-p);
    (2f32.powf(p * (t - 1.0)) - min) / (1.0 - min)
}

#[inline]
fn elastic_out(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let s = ELASTIC_PERIOD / 4.0;
    2f32.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / ELASTIC_PERIOD).sin() + 1.0
}

#[inline]
fn back_in(t: f32) -> f32 {
    let s = BACK_OVERSHOOT;
    t * t * ((s + 1.0) * t - s)
}

/// Cubic Bezier basis function.
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1], compute
/// the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

impl Ease {
    /// Map normalized progress `t` in [0,1] to eased progress.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::PowIn(p) => pow_in(t, p),
            Ease::PowOut(p) => pow_out(t, p),
            Ease::PowInOut(p) => {
                if t <= 0.5 {
                    pow_in(t * 2.0, p) / 2.0
                } else {
                    pow_out(t * 2.0 - 1.0, p) / 2.0 + 0.5
                }
            }
            Ease::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Ease::SineOut => (t * PI / 2.0).sin(),
            Ease::SineInOut => (1.0 - (t * PI).cos()) / 2.0,
            Ease::ExpIn(p) => exp_in(t, p),
            Ease::ExpOut(p) => 1.0 - exp_in(1.0 - t, p),
            Ease::ExpInOut(p) => {
                if t <= 0.5 {
                    exp_in(t * 2.0, p) / 2.0
                } else {
                    (2.0 - exp_in(2.0 - t * 2.0, p)) / 2.0
                }
            }
            Ease::ElasticIn => 1.0 - elastic_out(1.0 - t),
            Ease::ElasticOut => elastic_out(t),
            Ease::BackIn => back_in(t),
            Ease::BackOut => 1.0 - back_in(1.0 - t),
            Ease::Bezier([x1, y1, x2, y2]) => bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Ease] = &[
        Ease::Linear,
        Ease::PowIn(2),
        Ease::PowOut(3),
        Ease::PowInOut(2),
        Ease::SineIn,
        Ease::SineOut,
        Ease::SineInOut,
        Ease::ExpIn(5),
        Ease::ExpOut(5),
        Ease::ExpInOut(10),
        Ease::ElasticIn,
        Ease::ElasticOut,
        Ease::BackIn,
        Ease::BackOut,
        Ease::Bezier([0.42, 0.0, 0.58, 1.0]),
    ];

    #[test]
    fn endpoints_are_exact() {
        for ease in ALL {
            assert!(
                ease.apply(0.0).abs() < 1e-5,
                "{ease:?} apply(0) = {}",
                ease.apply(0.0)
            );
            assert!(
                (ease.apply(1.0) - 1.0).abs() < 1e-5,
                "{ease:?} apply(1) = {}",
                ease.apply(1.0)
            );
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Ease::Linear.apply(-2.0), 0.0);
        assert_eq!(Ease::Linear.apply(3.0), 1.0);
    }

    #[test]
    fn back_out_overshoots_above_one() {
        let mut max = 0.0f32;
        for i in 0..=100 {
            max = max.max(Ease::BackOut.apply(i as f32 / 100.0));
        }
        assert!(max > 1.0);
    }

    #[test]
    fn linear_bezier_fast_path() {
        let ease = Ease::Bezier([0.0, 0.0, 1.0, 1.0]);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_eq!(ease.apply(t), t);
        }
    }
}
