//! **Epicycle decompositions** of mathematical series: turn a symbolic
//! concept descriptor (Fourier square/sawtooth/triangle wave, Taylor
//! sin/cos/exp, Lissajous figure, epicycloid, or a constrained user-typed
//! expression) into a chain of rotating arms and the sampled curve their
//! tip traces.
//!
//! The crate is the pure mathematical core of an epicycle-animation
//! application: every operation is a synchronous, deterministic function of
//! its inputs, allocation is per-call, and nothing here renders, animates,
//! or exports. A GUI layer looks a concept up in the [`Catalog`], asks
//! [`build_epicycles`] for arms and [`sample_curve`] for the preview curve,
//! and drives [`chain_positions`] at its own cadence for the live
//! animation.
//!
//! Unrecognized names, categories, and equation text never error — they
//! degrade to documented fallback shapes, tagged with
//! [`Provenance::Fallback`] so callers can tell. Only the catalog boundary
//! can fail, with [`CatalogError`] separating a missing resource from a
//! corrupt one.
//!
//! # Features
//! - **f64** *(default)*: use f64 as `Real`
//! - **f32**: use f32 as `Real`, conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod concept;
pub mod catalog;
pub mod epicycle;
pub mod fourier;
pub mod taylor;
pub mod parametric;
pub mod builder;
pub mod equation;
pub mod sampler;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use builder::build_epicycles;
pub use catalog::Catalog;
pub use concept::{Category, Concept, SeriesKind};
pub use epicycle::{
    Direction, Epicycle, EpicycleSet, Provenance, chain_positions, final_position,
    normalize_angle,
};
pub use equation::parse_equation;
pub use errors::CatalogError;
pub use sampler::{SampledCurve, sample_curve};
