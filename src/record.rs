//! The standardized problem record every template produces.

use serde::{Deserialize, Serialize};

/// Fixed skill tag carried by every generated record.
pub const SKILL: &str = "SUBSTITUTION";
/// Fixed difficulty tag; only one tier is generated.
pub const DIFFICULTY: &str = "EASY";

/// Parallel TeX and plain-text renderings of one mathematical expression.
/// Both strings denote the same object; only the notation differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualForm {
    pub tex: String,
    pub plain: String,
}

impl DualForm {
    pub fn new(tex: impl Into<String>, plain: impl Into<String>) -> Self {
        DualForm {
            tex: tex.into(),
            plain: plain.into(),
        }
    }
}

/// Which trigonometric function a trig template drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigFunc {
    Sin,
    Cos,
}

impl TrigFunc {
    pub fn plain(self) -> &'static str {
        match self {
            TrigFunc::Sin => "sin",
            TrigFunc::Cos => "cos",
        }
    }

    pub fn tex(self) -> &'static str {
        match self {
            TrigFunc::Sin => "\\sin",
            TrigFunc::Cos => "\\cos",
        }
    }
}

/// Sampled parameters of one record, tagged by the template that produced it.
/// Serializes as a mapping with the identifier under `"type"` and every
/// parameter by name, so downstream consumers can group and filter records
/// without re-parsing the rendered strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Meta {
    S1 { a: i64, n: i64 },
    S2 { a: i64, b: i64, m: i64, n: i64 },
    S3 { a: i64, b: i64, n: i64 },
    S4 { a: i64, b: i64 },
    S5 { func: TrigFunc, a: i64, b_val: f64 },
}

impl Meta {
    /// Identifier of the template that produced the record.
    pub fn template(&self) -> &'static str {
        match self {
            Meta::S1 { .. } => "S1",
            Meta::S2 { .. } => "S2",
            Meta::S3 { .. } => "S3",
            Meta::S4 { .. } => "S4",
            Meta::S5 { .. } => "S5",
        }
    }
}

/// One generated practice problem: the integrand, its antiderivative, and the
/// sampled parameters that built both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub skill: String,
    pub difficulty: String,
    pub integrand_tex: String,
    pub integrand_plain: String,
    pub solution_tex: String,
    pub solution_plain: String,
    pub meta: Meta,
}

impl Problem {
    pub(crate) fn assemble(integrand: DualForm, solution: DualForm, meta: Meta) -> Self {
        Problem {
            skill: SKILL.to_string(),
            difficulty: DIFFICULTY.to_string(),
            integrand_tex: integrand.tex,
            integrand_plain: integrand.plain,
            solution_tex: solution.tex,
            solution_plain: solution.plain,
            meta,
        }
    }
}
