mod support;

use epicycles::float_types::{FRAC_PI_2, PI, Real, TAU};
use epicycles::fourier::{
    fourier_coefficients, sawtooth_wave, square_wave, square_wave_epicycles, triangle_wave,
    triangle_wave_epicycles,
};
use epicycles::final_position;

#[test]
fn square_partial_sum_converges_off_the_jumps() {
    // At t = π/2 the square wave is 1; with harmonics up to 99 the partial
    // sum is within the alternating-series tail bound.
    let arms = square_wave_epicycles(99);
    let value = final_position(&arms, FRAC_PI_2).y;
    assert!(support::approx_eq(value, square_wave(FRAC_PI_2, 1.0), 0.02), "got {}", value);

    // And mid-way through the negative half-period.
    let t = PI + FRAC_PI_2;
    let value = final_position(&arms, t).y;
    assert!(support::approx_eq(value, -1.0, 0.02), "got {}", value);
}

#[test]
fn triangle_partial_sum_converges_fast() {
    // Quadratic coefficient decay: a handful of terms is already close.
    let arms = triangle_wave_epicycles(9);
    for k in 1..8 {
        let t = TAU * k as Real / 8.0;
        let value = final_position(&arms, t).y;
        assert!(
            support::approx_eq(value, triangle_wave(t, 1.0), 0.05),
            "t = {}: {} vs {}",
            t,
            value,
            triangle_wave(t, 1.0)
        );
    }
}

#[test]
fn reference_waveforms_hit_landmark_values() {
    assert_eq!(square_wave(FRAC_PI_2, 2.0), 2.0);
    assert_eq!(square_wave(PI + FRAC_PI_2, 2.0), -2.0);
    assert!(support::approx_eq(triangle_wave(FRAC_PI_2, 1.0), 1.0, 1e-9));
    assert!(support::approx_eq(sawtooth_wave(PI, 1.0), 0.0, 1e-9));
    assert!(support::approx_eq(sawtooth_wave(0.0, 1.0), -1.0, 1e-9));
    // Period τ in all three.
    for t in [0.3, 1.7, 4.0] {
        assert!(support::approx_eq(square_wave(t, 1.0), square_wave(t + TAU, 1.0), 1e-9));
        assert!(support::approx_eq(triangle_wave(t, 1.0), triangle_wave(t + TAU, 1.0), 1e-9));
        assert!(support::approx_eq(sawtooth_wave(t, 1.0), sawtooth_wave(t + TAU, 1.0), 1e-6));
    }
}

#[test]
fn numeric_analysis_recovers_the_square_spectrum() {
    // |c_n| of the square wave is 2/(π·n) at odd n, ~0 at even n.
    let coeffs = fourier_coefficients(|t| square_wave(t, 1.0), 8, TAU);
    let half = 4usize;
    for (i, coeff) in coeffs.iter().enumerate() {
        let n = i as i64 - half as i64;
        let magnitude = coeff.norm();
        if n == 0 || n % 2 == 0 {
            assert!(magnitude < 0.01, "c_{} = {}", n, magnitude);
        } else {
            let expected = 2.0 / (PI * n.unsigned_abs() as Real);
            assert!(
                support::approx_eq(magnitude, expected, 0.01),
                "c_{} = {} vs {}",
                n,
                magnitude,
                expected
            );
        }
    }
}
