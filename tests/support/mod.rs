//! Test support library
//! Provides shared helpers for the integration suites.

use epicycles::float_types::Real;
use epicycles::{Direction, Epicycle};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// A deterministic spread of epicycle chains covering mixed radii, integer
/// and fractional frequencies, phase offsets, and both rotation senses.
pub fn varied_chains() -> Vec<Vec<Epicycle>> {
    let radii = [0.25, 1.0, 2.5];
    let frequencies = [0.5, 1.0, 3.0, 7.5];
    let phases = [0.0, 0.9, 4.4];

    let mut chains = Vec::new();
    for (i, &radius) in radii.iter().enumerate() {
        for (j, &frequency) in frequencies.iter().enumerate() {
            for &phase in &phases {
                let direction = if (i + j) % 2 == 0 {
                    Direction::CounterClockwise
                } else {
                    Direction::Clockwise
                };
                chains.push(vec![
                    Epicycle::new(radius, frequency, phase, direction),
                    Epicycle::ccw(1.0, 1.0, 0.0),
                    Epicycle::new(radius * 0.5, frequency * 2.0, phase + 0.3, direction),
                ]);
            }
        }
    }
    chains
}

/// Direct evaluation of the invariant sum
/// `Σ radiusᵢ · trig(directionᵢ·frequencyᵢ·t + phaseᵢ)`.
pub fn direct_component_sum(epicycles: &[Epicycle], t: Real, vertical: bool) -> Real {
    epicycles
        .iter()
        .map(|e| {
            let angle = e.direction.sign() * e.frequency * t + e.phase;
            if vertical { e.radius * angle.sin() } else { e.radius * angle.cos() }
        })
        .sum()
}
