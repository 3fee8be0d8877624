//! Template S1: pure power rule, `∫ a·x^n dx`.

use rand::Rng;

use crate::error::{GenError, Result};
use crate::format::{integer_or_frac, plain_frac, power_term};
use crate::record::{DualForm, Meta, Problem};

const TEMPLATE: &str = "S1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub a: i64,
    pub n: i64,
}

impl Params {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Params {
            a: rng.random_range(1..=5),
            n: rng.random_range(0..=5),
        }
    }

    fn check(&self) -> Result<()> {
        if self.a == 0 {
            return Err(GenError::degenerate(TEMPLATE, "zero leading coefficient"));
        }
        if self.n == -1 {
            return Err(GenError::degenerate(TEMPLATE, "exponent -1 escapes the power rule"));
        }
        Ok(())
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Problem> {
    build(Params::sample(rng))
}

pub fn build(params: Params) -> Result<Problem> {
    params.check()?;
    let Params { a, n } = params;

    let integrand = DualForm::new(
        format!("\\int {} \\, dx", power_term(&a.to_string(), n)),
        match n {
            0 => format!("{a}"),
            1 => format!("{a}*x"),
            _ => format!("{a}*x**{n}"),
        },
    );

    // Power rule: a/(n+1) * x^(n+1). Only the TeX coefficient collapses to
    // an integer; the plain form keeps the literal division.
    let new_n = n + 1;
    let solution = DualForm::new(
        format!("{}x^{{{new_n}}} + C", integer_or_frac(a, new_n)),
        format!("{} * x**{new_n} + C", plain_frac(a, new_n)),
    );

    Ok(Problem::assemble(integrand, solution, Meta::S1 { a, n }))
}
