//! Constrained custom-equation interpreter.
//!
//! This is a pattern extractor, not a parser: it scans the input for
//! additive terms of the shapes `coeff*sin(freq*t)` and `coeff*cos(freq*t)`
//! (both numbers optional) and turns each match into one epicycle arm.
//! Nested expressions, operator precedence, and any function other than
//! `sin`/`cos` are silently ignored — a deliberate scope limit, not a
//! defect to fix here. Unmatchable input degrades to a single default arm,
//! never an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::epicycle::{Epicycle, EpicycleSet};
use crate::float_types::{FRAC_PI_2, PI, Real};

static SIN_TERM: OnceLock<Regex> = OnceLock::new();
static COS_TERM: OnceLock<Regex> = OnceLock::new();

fn sin_term() -> &'static Regex {
    // Literal patterns; compilation cannot fail.
    SIN_TERM.get_or_init(|| {
        Regex::new(r"([+-]?[\d.]*)\*?sin\(([\d.]*)\*?t\)").expect("literal pattern")
    })
}

fn cos_term() -> &'static Regex {
    COS_TERM.get_or_init(|| {
        Regex::new(r"([+-]?[\d.]*)\*?cos\(([\d.]*)\*?t\)").expect("literal pattern")
    })
}

/// Extract sine/cosine terms from `expression` into epicycle arms.
///
/// All sine matches come first, then all cosine matches (scan order within
/// each pattern), truncated to `max_terms`. A missing coefficient or
/// frequency defaults to `1.0`; a captured literal that fails to parse as a
/// number (e.g. `1.2.3`) degrades that one term to the same default rather
/// than poisoning the whole parse. Coefficient signs fold into phase:
///
/// - `sin` term: phase `0`, or `π` for a negative coefficient;
/// - `cos` term: phase `π/2` (cosine is sine a quarter turn ahead), or
///   `3π/2` for a negative coefficient.
///
/// An input with no matches at all yields one default unit arm with
/// [`Provenance::Fallback`](crate::epicycle::Provenance); anything else is
/// `Known`.
pub fn parse_equation(expression: &str, max_terms: usize) -> EpicycleSet {
    let mut arms = Vec::new();

    for caps in sin_term().captures_iter(expression) {
        let (amplitude, negative) = parse_coefficient(&caps[1]);
        let phase = if negative { PI } else { 0.0 };
        arms.push(Epicycle::ccw(amplitude, parse_frequency(&caps[2]), phase));
    }
    for caps in cos_term().captures_iter(expression) {
        let (amplitude, negative) = parse_coefficient(&caps[1]);
        let phase = if negative { PI + FRAC_PI_2 } else { FRAC_PI_2 };
        arms.push(Epicycle::ccw(amplitude, parse_frequency(&caps[2]), phase));
    }

    let mut set = if arms.is_empty() {
        EpicycleSet::default_unit()
    } else {
        EpicycleSet::known(arms)
    };
    set.epicycles.truncate(max_terms);
    set
}

/// Split a captured coefficient into `(magnitude, is_negative)`.
/// Empty or malformed digits mean magnitude `1.0`.
fn parse_coefficient(raw: &str) -> (Real, bool) {
    let (digits, negative) = match raw.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (raw.strip_prefix('+').unwrap_or(raw), false),
    };
    let magnitude = if digits.is_empty() {
        1.0
    } else {
        digits.parse::<Real>().map(Real::abs).unwrap_or(1.0)
    };
    (magnitude, negative)
}

/// A captured frequency literal; empty or malformed means `1.0`.
fn parse_frequency(raw: &str) -> Real {
    if raw.is_empty() {
        1.0
    } else {
        raw.parse::<Real>().map(Real::abs).unwrap_or(1.0)
    }
}
