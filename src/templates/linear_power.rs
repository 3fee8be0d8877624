//! Template S3: linear argument raised to a power, `∫ (ax + b)^n dx`.

use rand::Rng;

use crate::error::{GenError, Result};
use crate::record::{DualForm, Meta, Problem};

const TEMPLATE: &str = "S3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub a: i64,
    pub b: i64,
    pub n: i64,
}

impl Params {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut b = rng.random_range(-5..=5);
        if b == 0 {
            // Fallback reassignment rather than a redraw, so b = 1 is
            // over-represented relative to a uniform draw over the range.
            b = 1;
        }
        Params {
            a: rng.random_range(1..=3),
            b,
            n: rng.random_range(1..=4),
        }
    }

    fn check(&self) -> Result<()> {
        if self.a == 0 {
            return Err(GenError::degenerate(TEMPLATE, "zero linear coefficient"));
        }
        if self.b == 0 {
            return Err(GenError::degenerate(TEMPLATE, "zero shift makes a bare power"));
        }
        if self.a * (self.n + 1) == 0 {
            return Err(GenError::degenerate(TEMPLATE, "vanishing substitution divisor"));
        }
        Ok(())
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Problem> {
    build(Params::sample(rng))
}

pub fn build(params: Params) -> Result<Problem> {
    params.check()?;
    let Params { a, b, n } = params;

    // The TeX term keeps an explicit coefficient even when a = 1, and the
    // plain form writes the shift signed inside `(a*x + b)`.
    let sign = if b > 0 { "+" } else { "-" };
    let term = format!("({a}x {sign} {})", b.abs());

    let integrand = DualForm::new(
        format!("\\int {term}^{{{n}}} \\, dx"),
        format!("({a}*x + {b})**{n}"),
    );

    // Linear substitution: 1/(a(n+1)) * (ax+b)^(n+1), always rendered as a
    // fraction.
    let denom = a * (n + 1);
    let solution = DualForm::new(
        format!("\\frac{{1}}{{{denom}}}{term}^{{{}}} + C", n + 1),
        format!("(1/{denom}) * ({a}*x + {b})**{} + C", n + 1),
    );

    Ok(Problem::assemble(integrand, solution, Meta::S3 { a, b, n }))
}
