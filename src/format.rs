//! Token-level formatting helpers shared by the problem templates.
//!
//! The TeX and plain renderings deliberately simplify differently: the TeX
//! coefficient collapses to an integer when the division is exact, while the
//! plain form always keeps the explicit unreduced division so it stays a
//! directly evaluable expression. Tests lock both behaviors down.

use num_rational::Rational64;

/// Typeset coefficient for `a/d`: the integer quotient when `d` divides `a`
/// (the empty token when that quotient is 1), otherwise a TeX fraction over
/// the original, unreduced numerator and denominator.
///
/// The empty token stands for an implicit coefficient of 1 and is only valid
/// immediately before a variable symbol, never as a bare constant.
pub fn integer_or_frac(a: i64, d: i64) -> String {
    debug_assert!(d > 0, "denominator must be positive");
    let c = Rational64::new(a, d);
    if c.is_integer() {
        let q = c.to_integer();
        if q == 1 {
            String::new()
        } else {
            q.to_string()
        }
    } else {
        format!("\\frac{{{a}}}{{{d}}}")
    }
}

/// Plain-form coefficient: always an explicit division, never reduced.
pub fn plain_frac(a: i64, d: i64) -> String {
    debug_assert!(d > 0, "denominator must be positive");
    format!("({a}/{d})")
}

/// Typeset `coeff * x^power`, collapsing notation by the exponent:
/// power 0 drops the variable, power 1 drops the exponent.
pub fn power_term(coeff: &str, power: i64) -> String {
    match power {
        0 => coeff.to_string(),
        1 => format!("{coeff}x"),
        _ => format!("{coeff}x^{{{power}}}"),
    }
}

/// Typeset `ax` head of a linear argument, suppressing the coefficient when
/// `a = 1`.
pub fn linear_head(a: i64) -> String {
    if a == 1 {
        "x".to_string()
    } else {
        format!("{a}x")
    }
}

/// Typeset linear argument `ax + b`: suppresses the coefficient when `a = 1`,
/// omits the shift when `b = 0`, and folds a negative shift into a minus.
pub fn linear_arg(a: i64, b: i64) -> String {
    let head = linear_head(a);
    match b.cmp(&0) {
        std::cmp::Ordering::Equal => head,
        std::cmp::Ordering::Greater => format!("{head} + {b}"),
        std::cmp::Ordering::Less => format!("{head} - {}", b.abs()),
    }
}

/// Sign and `1/a` scale composed into a single typeset prefix. A negative
/// scaled result reads `-\frac{1}{a}`, with the minus outside the fraction.
pub fn signed_scale_prefix(negative: bool, a: i64) -> String {
    let frac = if a == 1 {
        String::new()
    } else {
        format!("\\frac{{1}}{{{a}}}")
    };
    if negative {
        format!("-{frac}")
    } else {
        frac
    }
}
