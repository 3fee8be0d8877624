//! Randomized calculus drill generation: indefinite integrals solvable by a
//! single substitution step, each rendered in two parallel forms (TeX for
//! display, plain text for numeric evaluation) together with its exact
//! antiderivative.
//!
//! Every generation call is a pure function of the injected random source, so
//! concurrent callers are safe as long as each supplies its own `Rng` (or a
//! shared one that is itself thread-safe).

pub mod error;
pub mod format;
pub mod record;
pub mod templates;

pub use error::{GenError, Result};
pub use record::{DualForm, Meta, Problem, TrigFunc, DIFFICULTY, SKILL};
pub use templates::{
    generate_batch, generate_easy_problem, generate_easy_problem_with, Phase,
};
