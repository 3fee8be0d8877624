//! Template S2: sum of two power terms, `∫ (a·x^m + b·x^n) dx` with `m ≠ n`.

use rand::Rng;

use crate::error::{GenError, Result};
use crate::format::{integer_or_frac, plain_frac, power_term};
use crate::record::{DualForm, Meta, Problem};

const TEMPLATE: &str = "S2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub a: i64,
    pub b: i64,
    pub m: i64,
    pub n: i64,
}

impl Params {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let m = rng.random_range(0..=4);
        // Draw n without replacement: pick from the four remaining exponents.
        let mut n = rng.random_range(0..=3);
        if n >= m {
            n += 1;
        }
        Params {
            a: rng.random_range(1..=4),
            b: rng.random_range(1..=4),
            m,
            n,
        }
    }

    fn check(&self) -> Result<()> {
        if self.a == 0 || self.b == 0 {
            return Err(GenError::degenerate(TEMPLATE, "zero term coefficient"));
        }
        if self.m == self.n {
            return Err(GenError::degenerate(
                TEMPLATE,
                format!("equal exponents {} would collapse into one term", self.m),
            ));
        }
        Ok(())
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Problem> {
    build(Params::sample(rng))
}

pub fn build(params: Params) -> Result<Problem> {
    params.check()?;
    let Params { a, b, m, n } = params;

    let integrand = DualForm::new(
        format!(
            "\\int ({} + {}) \\, dx",
            power_term(&a.to_string(), m),
            power_term(&b.to_string(), n)
        ),
        // The plain form spells out both exponents even where the TeX form
        // collapses them.
        format!("({a}*x**{m} + {b}*x**{n})"),
    );

    let solution = DualForm::new(
        format!("{} + {} + C", solve_term_tex(a, m), solve_term_tex(b, n)),
        format!(
            "{}*x**{} + {}*x**{} + C",
            plain_frac(a, m + 1),
            m + 1,
            plain_frac(b, n + 1),
            n + 1
        ),
    );

    Ok(Problem::assemble(integrand, solution, Meta::S2 { a, b, m, n }))
}

fn solve_term_tex(coeff: i64, power: i64) -> String {
    let new_p = power + 1;
    format!("{}x^{{{new_p}}}", integer_or_frac(coeff, new_p))
}
