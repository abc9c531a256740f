//! The curve sampler: drives the kinematics evaluator across a time grid to
//! produce the static preview/axis-scaling curve for a concept.

use crate::builder::build_epicycles;
use crate::concept::{Category, Concept, SeriesKind};
use crate::epicycle::EpicycleSet;
use crate::float_types::{PI, Real, TAU};
use crate::parametric;

/// A sampled curve: parallel axes of equal length, strictly increasing in
/// sample order over one canonical period `[0, τ)`. Derived data — never
/// mutated, only regenerated.
///
/// For series concepts `t` is the time axis; for parametric concepts it
/// carries `x(t)` instead and `value` carries `y(t)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    pub t: Vec<Real>,
    pub value: Vec<Real>,
}

impl SampledCurve {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Largest absolute value on the value axis; a renderer's vertical
    /// axis limit.
    pub fn value_range(&self) -> Real {
        self.value.iter().fold(0.0, |max, v| max.max(v.abs()))
    }
}

/// Sample `concept` over one period: build its epicycles, walk a uniform
/// grid of `t_points` samples over `[0, τ)` (endpoint excluded), and
/// collect the family-appropriate value per grid point. Both returned axes
/// always have exactly `t_points` entries; no partial results.
///
/// Per family:
/// - **Fourier, custom, and anything unrecognized**: the value is the
///   vertical component of the chain's composite position — the partial
///   sum itself.
/// - **Taylor**: the value is the closed-form target (`sin t`, `cos t`, or
///   the original's shifted `exp(t - π)`); the arms visualize term decay
///   and are not summed here.
/// - **Parametric**: both axes come from the closed-form `(x(t), y(t))`.
///   The epicycle chain is returned alongside and agrees exactly for the
///   epicycloid; for the Lissajous pair the chain is a planar linkage over
///   the same arms and deliberately traces a different figure than the two
///   independent axis oscillators.
pub fn sample_curve(
    concept: &Concept,
    n_terms: usize,
    t_points: usize,
) -> (SampledCurve, EpicycleSet) {
    let epicycles = build_epicycles(concept, n_terms);
    let grid = (0..t_points).map(|i| TAU * i as Real / t_points as Real);

    let (t, value) = match sample_rule(concept) {
        SampleRule::Chain => grid
            .map(|t| (t, epicycles.final_position(t).y))
            .unzip(),
        SampleRule::ClosedForm(f) => grid.map(|t| (t, f(t))).unzip(),
        SampleRule::Parametric(f) => grid.map(f).unzip(),
    };

    (SampledCurve { t, value }, epicycles)
}

enum SampleRule {
    /// Vertical chain component against time.
    Chain,
    /// A closed-form value against time.
    ClosedForm(fn(Real) -> Real),
    /// Closed-form `(x(t), y(t))`.
    Parametric(fn(Real) -> (Real, Real)),
}

fn sample_rule(concept: &Concept) -> SampleRule {
    match (&concept.category, concept.kind) {
        (_, Some(SeriesKind::Lissajous)) => SampleRule::Parametric(parametric::lissajous_point),
        (_, Some(SeriesKind::Epicycloid)) => {
            SampleRule::Parametric(parametric::epicycloid_point)
        },
        (Category::ParametricCurves, None) => {
            SampleRule::Parametric(parametric::circle_point)
        },
        (_, Some(SeriesKind::TaylorSine)) => SampleRule::ClosedForm(Real::sin),
        (_, Some(SeriesKind::TaylorCosine)) => SampleRule::ClosedForm(Real::cos),
        (_, Some(SeriesKind::TaylorExponential)) => SampleRule::ClosedForm(shifted_exp),
        (Category::TaylorSeries, None) => SampleRule::ClosedForm(Real::sin),
        _ => SampleRule::Chain,
    }
}

/// `exp(t - π)`: the exponential shifted so one period fits the frame.
fn shifted_exp(t: Real) -> Real {
    (t - PI).exp()
}
