//! Parametric curves: fixed two-arm epicycle pairs and their closed-form
//! traces.
//!
//! Unlike the series families, parametric concepts do not come from a
//! coefficient rule. Each known sub-type carries a hardcoded pair of arms
//! (the constants are part of the contract, not tunable inputs) and a
//! closed-form `(x(t), y(t))` the sampler plots directly.

use crate::epicycle::Epicycle;
use crate::float_types::{FRAC_PI_2, PI, Real};

/// Lissajous frequency ratio `a : b` and phase delta used by the catalog
/// concept: `x(t) = sin(3t + π/2)`, `y(t) = sin(2t)`.
pub const LISSAJOUS_FREQ_X: Real = 3.0;
pub const LISSAJOUS_FREQ_Y: Real = 2.0;
pub const LISSAJOUS_DELTA: Real = FRAC_PI_2;

/// Epicycloid radii: a circle of radius `r` rolling on a circle of radius
/// `R`. The rolling contact fixes the second arm's rate at `(R + r)/r`.
pub const EPICYCLOID_R: Real = 3.0;
pub const EPICYCLOID_SMALL_R: Real = 1.0;

/// The two Lissajous arms: one per oscillator, mutually independent (this
/// is a pair of axis projections, not a rolling linkage).
pub fn lissajous_epicycles() -> Vec<Epicycle> {
    vec![
        Epicycle::ccw(1.0, LISSAJOUS_FREQ_X, LISSAJOUS_DELTA),
        Epicycle::ccw(1.0, LISSAJOUS_FREQ_Y, 0.0),
    ]
}

/// Closed-form Lissajous trace.
pub fn lissajous_point(t: Real) -> (Real, Real) {
    (
        (LISSAJOUS_FREQ_X * t + LISSAJOUS_DELTA).sin(),
        (LISSAJOUS_FREQ_Y * t).sin(),
    )
}

/// The two epicycloid arms: carrier of radius `R + r` at unit rate, rider
/// of radius `r` at rate `(R + r)/r` half a turn out of phase. Chained,
/// their tip reproduces [`epicycloid_point`] exactly.
pub fn epicycloid_epicycles() -> Vec<Epicycle> {
    let ratio = (EPICYCLOID_R + EPICYCLOID_SMALL_R) / EPICYCLOID_SMALL_R;
    vec![
        Epicycle::ccw(EPICYCLOID_R + EPICYCLOID_SMALL_R, 1.0, 0.0),
        Epicycle::ccw(EPICYCLOID_SMALL_R, ratio, PI),
    ]
}

/// Closed-form epicycloid trace:
/// ```text
/// x(t) = (R + r)·cos(t) - r·cos((R + r)/r · t)
/// y(t) = (R + r)·sin(t) - r·sin((R + r)/r · t)
/// ```
pub fn epicycloid_point(t: Real) -> (Real, Real) {
    let sum = EPICYCLOID_R + EPICYCLOID_SMALL_R;
    let ratio = sum / EPICYCLOID_SMALL_R;
    (
        sum * t.cos() - EPICYCLOID_SMALL_R * (ratio * t).cos(),
        sum * t.sin() - EPICYCLOID_SMALL_R * (ratio * t).sin(),
    )
}

/// The fallback shape for parametric concepts this crate does not
/// recognize: the unit circle.
pub fn unit_circle_epicycles() -> Vec<Epicycle> {
    vec![Epicycle::unit()]
}

/// Unit-circle trace.
pub fn circle_point(t: Real) -> (Real, Real) {
    (t.cos(), t.sin())
}

/// Named Lissajous figure presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LissajousVariant {
    Circle,
    Ellipse,
    Eight,
    ThreeLeaf,
    FourLeaf,
    Complex,
}

impl LissajousVariant {
    /// `(freq_x, freq_y, phase_shift)` for this figure.
    pub const fn params(self) -> (Real, Real, Real) {
        match self {
            LissajousVariant::Circle => (1.0, 1.0, FRAC_PI_2),
            LissajousVariant::Ellipse => (1.0, 1.0, PI / 4.0),
            LissajousVariant::Eight => (1.0, 2.0, 0.0),
            LissajousVariant::ThreeLeaf => (2.0, 3.0, 0.0),
            LissajousVariant::FourLeaf => (3.0, 4.0, PI / 4.0),
            LissajousVariant::Complex => (3.0, 5.0, PI / 6.0),
        }
    }
}

/// Parameters for a named Lissajous figure; unknown names fall back to the
/// circle preset rather than failing.
pub fn lissajous_params(variant: &str) -> (Real, Real, Real) {
    let variant = match variant {
        "circle" => LissajousVariant::Circle,
        "ellipse" => LissajousVariant::Ellipse,
        "eight" => LissajousVariant::Eight,
        "three_leaf" => LissajousVariant::ThreeLeaf,
        "four_leaf" => LissajousVariant::FourLeaf,
        "complex" => LissajousVariant::Complex,
        _ => LissajousVariant::Circle,
    };
    variant.params()
}
