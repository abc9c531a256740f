//! Struct and functions for working with `Epicycle`s: rotating arms whose
//! chained tips trace a series' partial sum.

use crate::float_types::{Real, TAU};
use nalgebra::{Point2, Vector2};

/// Rotation sense of an epicycle arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    CounterClockwise,
    Clockwise,
}

impl Direction {
    /// Signed rotation factor: `+1` counter-clockwise, `-1` clockwise.
    pub const fn sign(self) -> Real {
        match self {
            Direction::CounterClockwise => 1.0,
            Direction::Clockwise => -1.0,
        }
    }
}

/// One rotating arm, a pure value.
///
/// A list of epicycles is positional: index 0 is attached to the world
/// origin and index `i + 1` rides on the tip of index `i`. The arm's tip,
/// relative to its own center, sits at
/// `radius · (cos θ, sin θ)` with `θ = direction·frequency·t + phase`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epicycle {
    /// Arm length, non-negative; sign conventions live in `phase`.
    pub radius: Real,
    /// Signed angular rate. Non-integer rates are legal (epicycloid arms).
    pub frequency: Real,
    /// Phase offset in radians, not normalized.
    pub phase: Real,
    pub direction: Direction,
}

impl Epicycle {
    pub const fn new(radius: Real, frequency: Real, phase: Real, direction: Direction) -> Self {
        Epicycle { radius, frequency, phase, direction }
    }

    /// Counter-clockwise arm, the common case for series terms.
    pub const fn ccw(radius: Real, frequency: Real, phase: Real) -> Self {
        Epicycle::new(radius, frequency, phase, Direction::CounterClockwise)
    }

    /// The default unit arm every fallback path degrades to.
    pub const fn unit() -> Self {
        Epicycle::ccw(1.0, 1.0, 0.0)
    }

    /// Angle of this arm at time `t`.
    pub fn angle_at(&self, t: Real) -> Real {
        self.direction.sign() * self.frequency * t + self.phase
    }

    /// Tip displacement of this arm relative to its center at time `t`.
    ///
    /// Shared by [`chain_positions`] and [`final_position`] so the chain's
    /// last joint and the composite position cannot drift apart.
    pub fn displacement_at(&self, t: Real) -> Vector2<Real> {
        let (sin, cos) = self.angle_at(t).sin_cos();
        Vector2::new(self.radius * cos, self.radius * sin)
    }

    /// This arm's vertical contribution at time `t`:
    /// `radius · sin(direction·frequency·t + phase)`. This is the trace a
    /// renderer plots per-arm in the "individual components" panel.
    pub fn value_at(&self, t: Real) -> Real {
        self.radius * self.angle_at(t).sin()
    }
}

impl Default for Epicycle {
    fn default() -> Self {
        Epicycle::unit()
    }
}

/// Whether a build recognized the requested concept or degraded to a
/// documented default shape. Either way the epicycles are drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Generated from a recognized series family.
    Known,
    /// The category's (or the global) default shape.
    Fallback,
}

/// An ordered epicycle chain plus the provenance of its generation.
///
/// Produced fresh by the model builder for every request; never cached,
/// never mutated. Transforms return new sets.
#[derive(Debug, Clone, PartialEq)]
pub struct EpicycleSet {
    pub epicycles: Vec<Epicycle>,
    pub provenance: Provenance,
}

impl EpicycleSet {
    pub fn known(epicycles: Vec<Epicycle>) -> Self {
        EpicycleSet { epicycles, provenance: Provenance::Known }
    }

    /// A set holding the given fallback arms.
    pub fn fallback(epicycles: Vec<Epicycle>) -> Self {
        EpicycleSet { epicycles, provenance: Provenance::Fallback }
    }

    /// The single default unit arm, the end of every fallback chain.
    pub fn default_unit() -> Self {
        EpicycleSet::fallback(vec![Epicycle::unit()])
    }

    pub fn len(&self) -> usize {
        self.epicycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epicycles.is_empty()
    }

    /// Sum of all arm lengths: the radius of the disc the chain can reach,
    /// which is what a renderer uses for axis limits.
    pub fn total_radius(&self) -> Real {
        self.epicycles.iter().map(|e| e.radius).sum()
    }

    /// Pure parameter-adjustment transform: scales every radius and
    /// frequency and shifts every phase, returning a new set. Provenance is
    /// carried over unchanged.
    ///
    /// This replaces in-place editing of generated arms; the builder's
    /// output stays immutable.
    pub fn scaled(&self, amplitude_scale: Real, frequency_scale: Real, phase_offset: Real) -> Self {
        let epicycles = self
            .epicycles
            .iter()
            .map(|e| Epicycle {
                radius: e.radius * amplitude_scale,
                frequency: e.frequency * frequency_scale,
                phase: e.phase + phase_offset,
                direction: e.direction,
            })
            .collect();
        EpicycleSet { epicycles, provenance: self.provenance }
    }

    /// See [`chain_positions`].
    pub fn chain_positions(&self, t: Real) -> Vec<Point2<Real>> {
        chain_positions(&self.epicycles, t)
    }

    /// See [`final_position`].
    pub fn final_position(&self, t: Real) -> Point2<Real> {
        final_position(&self.epicycles, t)
    }
}

/// All joint positions of the chain at time `t`.
///
/// Returns `epicycles.len() + 1` points: position 0 is the world origin,
/// position `i + 1` is the tip of arm `i` (equivalently the center of arm
/// `i + 1`). The last point is the composite position of the whole chain.
pub fn chain_positions(epicycles: &[Epicycle], t: Real) -> Vec<Point2<Real>> {
    let mut positions = Vec::with_capacity(epicycles.len() + 1);
    let mut current = Point2::origin();
    positions.push(current);
    for epicycle in epicycles {
        current += epicycle.displacement_at(t);
        positions.push(current);
    }
    positions
}

/// Composite position of the chain at time `t`: the vector sum of every
/// arm's displacement, identical to the last element of [`chain_positions`].
pub fn final_position(epicycles: &[Epicycle], t: Real) -> Point2<Real> {
    epicycles
        .iter()
        .fold(Point2::origin(), |pos, epicycle| pos + epicycle.displacement_at(t))
}

/// Normalize an angle into `[0, τ)`.
pub fn normalize_angle(angle: Real) -> Real {
    angle.rem_euclid(TAU)
}
