//! The epicycle model builder: one dispatch from a concept descriptor to a
//! generated arm chain.

use crate::concept::{Category, Concept, SeriesKind};
use crate::epicycle::EpicycleSet;
use crate::{equation, fourier, parametric, taylor};

/// Build the epicycle chain for `concept` with the requested term count.
///
/// Dispatch is a single `match` over the concept's pre-resolved
/// [`SeriesKind`]; no name inspection happens here. Every path returns a
/// drawable set — unrecognized names degrade to their category's default
/// shape and unrecognized categories to a single unit arm, with the
/// degradation recorded as [`Provenance::Fallback`](crate::epicycle::Provenance).
/// Never panics, never errors.
///
/// Parametric concepts ignore `n_terms`: their arm pairs are fixed
/// constants of the curve, not series truncations.
pub fn build_epicycles(concept: &Concept, n_terms: usize) -> EpicycleSet {
    match concept.kind {
        Some(SeriesKind::SquareWave) => {
            EpicycleSet::known(fourier::square_wave_epicycles(n_terms))
        },
        Some(SeriesKind::SawtoothWave) => {
            EpicycleSet::known(fourier::sawtooth_wave_epicycles(n_terms))
        },
        Some(SeriesKind::TriangleWave) => {
            EpicycleSet::known(fourier::triangle_wave_epicycles(n_terms))
        },
        Some(SeriesKind::Lissajous) => EpicycleSet::known(parametric::lissajous_epicycles()),
        Some(SeriesKind::Epicycloid) => EpicycleSet::known(parametric::epicycloid_epicycles()),
        Some(SeriesKind::TaylorSine) => {
            EpicycleSet::known(taylor::taylor_sine_epicycles(n_terms))
        },
        Some(SeriesKind::TaylorCosine) => {
            EpicycleSet::known(taylor::taylor_cosine_epicycles(n_terms))
        },
        Some(SeriesKind::TaylorExponential) => {
            EpicycleSet::known(taylor::taylor_exp_epicycles(n_terms))
        },
        Some(SeriesKind::CustomEquation) => equation::parse_equation(&concept.equation, n_terms),
        None => fallback_for(concept),
    }
}

/// The documented default shape for a concept whose name matched no known
/// keyword: unit circle for parametric curves, a plain sine arm for Taylor
/// series, and the single unit arm for everything else.
fn fallback_for(concept: &Concept) -> EpicycleSet {
    log::debug!(
        "no generator for {:?} concept {:?}; using category fallback",
        concept.category.key(),
        concept.name
    );
    match concept.category {
        Category::ParametricCurves => {
            EpicycleSet::fallback(parametric::unit_circle_epicycles())
        },
        _ => EpicycleSet::default_unit(),
    }
}
