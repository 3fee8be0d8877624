//! Template S5: sine or cosine of a linear argument, `∫ sin/cos(ax + b) dx`,
//! with the phase shift drawn from a fixed palette of multiples of π.

use rand::Rng;

use crate::error::{GenError, Result};
use crate::format::{linear_head, signed_scale_prefix};
use crate::record::{DualForm, Meta, Problem, TrigFunc};

const TEMPLATE: &str = "S5";

/// The five phase shifts offered, in units of π.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Zero,
    Pi,
    NegPi,
    HalfPi,
    NegHalfPi,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Zero,
        Phase::Pi,
        Phase::NegPi,
        Phase::HalfPi,
        Phase::NegHalfPi,
    ];

    /// Numeric value in units of π, as recorded under `b_val` in the meta.
    pub fn value(self) -> f64 {
        match self {
            Phase::Zero => 0.0,
            Phase::Pi => 1.0,
            Phase::NegPi => -1.0,
            Phase::HalfPi => 0.5,
            Phase::NegHalfPi => -0.5,
        }
    }

    /// TeX token; negative phases carry their own sign.
    pub fn tex(self) -> &'static str {
        match self {
            Phase::Zero => "0",
            Phase::Pi => "\\pi",
            Phase::NegPi => "-\\pi",
            Phase::HalfPi => "\\frac{\\pi}{2}",
            Phase::NegHalfPi => "-\\frac{\\pi}{2}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub func: TrigFunc,
    pub a: i64,
    pub phase: Phase,
}

impl Params {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Params {
            func: if rng.random_bool(0.5) {
                TrigFunc::Sin
            } else {
                TrigFunc::Cos
            },
            a: rng.random_range(1..=3),
            phase: Phase::ALL[rng.random_range(0..Phase::ALL.len())],
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
    let Params { func, a, phase } = params;
    let b_val = phase.value();

    let head = linear_head(a);
    // Negative phase tokens carry the sign, so they follow a bare space.
    let arg_tex = if b_val == 0.0 {
        head
    } else if b_val > 0.0 {
        format!("{head} + {}", phase.tex())
    } else {
        format!("{head} {}", phase.tex())
    };
    let arg_plain = if b_val == 0.0 {
        format!("{a}*x")
    } else {
        format!("{a}*x + {b_val}*pi")
    };

    let integrand = DualForm::new(
        format!("\\int {}({arg_tex}) \\, dx", func.tex()),
        format!("{}({arg_plain})", func.plain()),
    );

    // ∫sin(u)du = -cos(u), ∫cos(u)du = sin(u), both scaled by 1/a.
    let (anti, negative) = match func {
        TrigFunc::Sin => (TrigFunc::Cos, true),
        TrigFunc::Cos => (TrigFunc::Sin, false),
    };
    let sign = if negative { "-" } else { "" };
    let solution = DualForm::new(
        format!(
            "{}{}({arg_tex}) + C",
            signed_scale_prefix(negative, a),
            anti.tex()
        ),
        format!("{sign}(1/{a}) * {}({arg_plain}) + C", anti.plain()),
    );

    Ok(Problem::assemble(integrand, solution, Meta::S5 { func, a, b_val }))
}
