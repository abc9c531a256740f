mod support;

use epicycles::float_types::{EPSILON, FRAC_PI_2, PI};
use epicycles::{Epicycle, Provenance, parse_equation};

#[test]
fn two_term_sine_sum_extracts_both() {
    let set = parse_equation("sin(t) + 0.5*sin(3*t)", 10);
    assert_eq!(set.len(), 2);
    assert_eq!(set.provenance, Provenance::Known);
    assert!(support::approx_eq(set.epicycles[0].radius, 1.0, EPSILON));
    assert!(support::approx_eq(set.epicycles[0].frequency, 1.0, EPSILON));
    assert_eq!(set.epicycles[0].phase, 0.0);
    assert!(support::approx_eq(set.epicycles[1].radius, 0.5, EPSILON));
    assert!(support::approx_eq(set.epicycles[1].frequency, 3.0, EPSILON));
    assert_eq!(set.epicycles[1].phase, 0.0);
}

#[test]
fn empty_and_garbage_yield_one_default_arm() {
    for text in ["", "garbage"] {
        let set = parse_equation(text, 10);
        assert_eq!(set.epicycles, vec![Epicycle::unit()], "input: {:?}", text);
        assert_eq!(set.provenance, Provenance::Fallback);
    }
}

#[test]
fn mixed_terms_keep_sin_before_cos() {
    let set = parse_equation("0.25*cos(5*t) + 2*sin(2*t)", 10);
    assert_eq!(set.len(), 2);
    assert!(support::approx_eq(set.epicycles[0].radius, 2.0, EPSILON));
    assert!(support::approx_eq(set.epicycles[0].frequency, 2.0, EPSILON));
    assert!(support::approx_eq(set.epicycles[1].radius, 0.25, EPSILON));
    assert!(support::approx_eq(set.epicycles[1].phase, FRAC_PI_2, EPSILON));
}

#[test]
fn negative_cosine_lands_three_quarters_turn() {
    let set = parse_equation("-cos(t)", 4);
    assert_eq!(set.len(), 1);
    assert!(support::approx_eq(set.epicycles[0].phase, PI + FRAC_PI_2, EPSILON));
}

#[test]
fn unsupported_functions_are_ignored_not_rejected() {
    // The extractor skips what it cannot read; surviving terms still parse.
    let set = parse_equation("exp(-t/2)*sin(t) + tan(3*t)", 10);
    assert_eq!(set.len(), 1);
    assert!(support::approx_eq(set.epicycles[0].frequency, 1.0, EPSILON));
}

#[test]
fn truncation_respects_max_terms() {
    let set = parse_equation("sin(t) + 0.5*sin(3*t) + 0.25*sin(5*t)", 2);
    assert_eq!(set.len(), 2);
    assert!(support::approx_eq(set.epicycles[1].frequency, 3.0, EPSILON));
}

#[test]
fn fractional_frequencies_parse() {
    let set = parse_equation("sin(0.5*t)", 10);
    assert!(support::approx_eq(set.epicycles[0].frequency, 0.5, EPSILON));
}
