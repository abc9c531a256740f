//! Fourier-series generators: closed-form partial-sum coefficients for the
//! classic waveforms, their reference (target) functions, and a numeric
//! coefficient analysis for arbitrary periodic samples.

use crate::epicycle::Epicycle;
use crate::float_types::{PI, Real, TAU};
use nalgebra::Complex;

/// **Mathematical Foundation: Fourier Partial Sums as Epicycle Chains**
///
/// The square wave of unit amplitude has the Fourier expansion
/// ```text
/// f(t) = (4/π) · Σ (1/n) · sin(n·t),   n = 1, 3, 5, …
/// ```
/// Each term maps to one counter-clockwise arm of radius `4/(π·n)` turning
/// at angular rate `n` with zero phase; the chain's vertical component then
/// reproduces the partial sum exactly.
///
/// ## Term selection
/// Only odd harmonics up to and including `n_terms` are emitted, so the
/// result holds `⌈n_terms/2⌉` arms. `n_terms = 0` yields an empty chain.
///
/// ## Convergence
/// The partial sum converges pointwise away from the discontinuities with
/// max coefficient error `O(1/n)`; near the jumps the Gibbs overshoot
/// (~8.95%) never vanishes. Callers wanting a closer trace raise
/// `n_terms`, they never rescale the arms.
pub fn square_wave_epicycles(n_terms: usize) -> Vec<Epicycle> {
    (1..=n_terms)
        .step_by(2)
        .map(|n| Epicycle::ccw(4.0 / (PI * n as Real), n as Real, 0.0))
        .collect()
}

/// Sawtooth-wave arms: `f(t) = (2/π) · Σ [(-1)^(n+1)/n] · sin(n·t)` over
/// all harmonics `n = 1..=n_terms`. Radii must stay non-negative, so the
/// alternating sign folds into the phase: positive amplitude keeps phase 0,
/// negative amplitude shifts by π.
pub fn sawtooth_wave_epicycles(n_terms: usize) -> Vec<Epicycle> {
    (1..=n_terms)
        .map(|n| {
            let amplitude = 2.0 / (PI * n as Real) * sign_pow(n + 1);
            fold_sign(amplitude, n as Real)
        })
        .collect()
}

/// Triangle-wave arms: `f(t) = (8/π²) · Σ [(-1)^((n-1)/2)/n²] · sin(n·t)`
/// over odd harmonics only, with the same sign-to-phase folding as the
/// sawtooth.
pub fn triangle_wave_epicycles(n_terms: usize) -> Vec<Epicycle> {
    (1..=n_terms)
        .step_by(2)
        .map(|n| {
            let amplitude = 8.0 / (PI * PI * (n * n) as Real) * sign_pow((n - 1) / 2);
            fold_sign(amplitude, n as Real)
        })
        .collect()
}

/// `(-1)^k` as a `Real`.
fn sign_pow(k: usize) -> Real {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

/// Store a signed amplitude as a non-negative radius, moving the sign into
/// the phase (`sin(x + π) = -sin(x)`).
fn fold_sign(amplitude: Real, frequency: Real) -> Epicycle {
    let phase = if amplitude > 0.0 { 0.0 } else { PI };
    Epicycle::ccw(amplitude.abs(), frequency, phase)
}

/// The ideal square wave the partial sums approximate.
pub fn square_wave(t: Real, amplitude: Real) -> Real {
    amplitude * t.sin().signum()
}

/// The ideal triangle wave: `(2/π)·asin(sin t)`, scaled.
pub fn triangle_wave(t: Real, amplitude: Real) -> Real {
    amplitude * (2.0 / PI) * t.sin().asin()
}

/// The ideal sawtooth wave rising from `-amplitude` to `+amplitude` over
/// each period.
pub fn sawtooth_wave(t: Real, amplitude: Real) -> Real {
    amplitude * t.rem_euclid(TAU) / PI - amplitude
}

/// Number of sample points used by [`fourier_coefficients`].
const ANALYSIS_SAMPLES: usize = 1000;

/// Numeric Fourier analysis of an arbitrary periodic function.
///
/// Samples `f` at 1000 uniform points over one `period` (endpoint
/// excluded) and returns the complex coefficients
/// ```text
/// c_n = mean( f(t) · exp(-i·2π·n·t/period) ),   n ∈ [-n_terms/2, n_terms/2]
/// ```
/// in ascending order of `n`; the middle entry is the DC component. This is
/// the discrete-mean approximation of the analysis integral, good to the
/// sampling resolution — it is an analysis aid, not a replacement for the
/// closed-form generators above.
pub fn fourier_coefficients<F>(f: F, n_terms: usize, period: Real) -> Vec<Complex<Real>>
where
    F: Fn(Real) -> Real,
{
    let samples: Vec<(Real, Real)> = (0..ANALYSIS_SAMPLES)
        .map(|k| {
            let t = period * k as Real / ANALYSIS_SAMPLES as Real;
            (t, f(t))
        })
        .collect();

    let half = (n_terms / 2) as i64;
    (-half..=half)
        .map(|n| {
            let sum: Complex<Real> = samples
                .iter()
                .map(|&(t, value)| {
                    let angle = -TAU * n as Real * t / period;
                    Complex::new(angle.cos(), angle.sin()) * value
                })
                .sum();
            sum / ANALYSIS_SAMPLES as Real
        })
        .collect()
}
