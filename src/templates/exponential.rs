//! Template S4: exponential of a linear argument, `∫ e^(ax + b) dx`.

use rand::Rng;

use crate::error::{GenError, Result};
use crate::format::{linear_arg, signed_scale_prefix};
use crate::record::{DualForm, Meta, Problem};

const TEMPLATE: &str = "S4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub a: i64,
    pub b: i64,
}

impl Params {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Params {
            a: rng.random_range(1..=3),
            // A zero shift is fine here; the exponent just loses its
            // additive term.
            b: rng.random_range(-3..=3),
        }
    }

    fn check(&self) -> Result<()> {
        if self.a == 0 {
            return Err(GenError::degenerate(TEMPLATE, "zero linear coefficient"));
        }
        Ok(())
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Problem> {
    build(Params::sample(rng))
}

pub fn build(params: Params) -> Result<Problem> {
    params.check()?;
    let Params { a, b } = params;

    // The plain form always spells out `exp(a*x + b)`; only the TeX exponent
    // collapses the a = 1 and b = 0 cases.
    let exponent = linear_arg(a, b);
    let integrand = DualForm::new(
        format!("\\int e^{{{exponent}}} \\, dx"),
        format!("exp({a}*x + {b})"),
    );

    let solution = DualForm::new(
        format!("{}e^{{{exponent}}} + C", signed_scale_prefix(false, a)),
        format!("(1/{a}) * exp({a}*x + {b}) + C"),
    );

    Ok(Problem::assemble(integrand, solution, Meta::S4 { a, b }))
}
