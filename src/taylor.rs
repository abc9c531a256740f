//! Taylor-series generators: coefficient sequences around `x = 0` and their
//! mapping into visualization epicycles.
//!
//! Unlike the Fourier arms, Taylor epicycles are a didactic device, not a
//! reconstruction: each power's coefficient becomes one arm whose radius is
//! the coefficient magnitude under an empirical visualization scale, and
//! whose angular rate is the power itself. The traced figure conveys how
//! quickly the terms shrink, while the sampler plots the target function in
//! closed form.

use crate::epicycle::Epicycle;
use crate::float_types::{PI, Real};

/// Empirical radius scale for the sin/cos arms; factorially shrinking
/// coefficients are invisible without it.
const TRIG_VISUAL_SCALE: Real = 2.0;
/// Empirical radius scale for the exponential arms, whose leading
/// coefficients are large instead.
const EXP_VISUAL_SCALE: Real = 0.5;

/// `n!` as a `Real`. Exact for every power a drawable term count reaches;
/// beyond that the arms are sub-epsilon anyway.
fn factorial(n: usize) -> Real {
    (1..=n).fold(1.0, |acc, k| acc * k as Real)
}

/// `(-1)^k` as a `Real`.
fn sign_pow(k: usize) -> Real {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

/// Dense Taylor coefficients of `sin(x)` for powers `0..n_terms`:
/// `(-1)^((p-1)/2) / p!` at odd `p`, zero elsewhere.
pub fn taylor_sin_coefficients(n_terms: usize) -> Vec<Real> {
    (0..n_terms)
        .map(|p| {
            if p % 2 == 1 { sign_pow((p - 1) / 2) / factorial(p) } else { 0.0 }
        })
        .collect()
}

/// Dense Taylor coefficients of `cos(x)` for powers `0..n_terms`:
/// `(-1)^(p/2) / p!` at even `p`, zero elsewhere.
pub fn taylor_cos_coefficients(n_terms: usize) -> Vec<Real> {
    (0..n_terms)
        .map(|p| if p % 2 == 0 { sign_pow(p / 2) / factorial(p) } else { 0.0 })
        .collect()
}

/// Dense Taylor coefficients of `e^x` for powers `0..n_terms`: `1 / p!`.
pub fn taylor_exp_coefficients(n_terms: usize) -> Vec<Real> {
    (0..n_terms).map(|p| 1.0 / factorial(p)).collect()
}

/// Arms for the sine expansion `x - x³/3! + x⁵/5! - …`.
///
/// One arm per odd power below `n_terms`, radius `|coeff| · 2`, angular
/// rate equal to the power, alternating sign folded into phase `{0, π}`.
pub fn taylor_sine_epicycles(n_terms: usize) -> Vec<Epicycle> {
    (1..n_terms)
        .step_by(2)
        .map(|p| {
            let coeff = sign_pow((p - 1) / 2) / factorial(p);
            trig_arm(coeff, p)
        })
        .collect()
}

/// Arms for the cosine expansion `1 - x²/2! + x⁴/4! - …`, one per even
/// power below `n_terms`. The power-0 arm has frequency zero: a static
/// offset, faithful to the constant term.
pub fn taylor_cosine_epicycles(n_terms: usize) -> Vec<Epicycle> {
    (0..n_terms)
        .step_by(2)
        .map(|p| {
            let coeff = sign_pow(p / 2) / factorial(p);
            trig_arm(coeff, p)
        })
        .collect()
}

/// Arms for the exponential expansion `Σ xᵖ/p!`, one per power below
/// `n_terms`, all positive so every phase is zero.
pub fn taylor_exp_epicycles(n_terms: usize) -> Vec<Epicycle> {
    (0..n_terms)
        .map(|p| Epicycle::ccw(EXP_VISUAL_SCALE / factorial(p), p as Real, 0.0))
        .collect()
}

fn trig_arm(coeff: Real, power: usize) -> Epicycle {
    let phase = if coeff > 0.0 { 0.0 } else { PI };
    Epicycle::ccw(coeff.abs() * TRIG_VISUAL_SCALE, power as Real, phase)
}
