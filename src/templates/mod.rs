//! The five problem templates and the uniform dispatcher over them.
//!
//! Each template is self-contained: it samples its own parameters, renders
//! the integrand in both forms, computes the closed-form antiderivative, and
//! assembles the final record. The dispatcher only chooses which template
//! runs; the choice is uniform over template identity, not over the (unevenly
//! sized) underlying parameter spaces.

pub mod exponential;
pub mod linear_power;
pub mod power;
pub mod power_sum;
pub mod trig;

use rand::Rng;

use crate::error::Result;
use crate::record::Problem;

pub use trig::Phase;

/// Generate one EASY substitution problem from an injected random source.
pub fn generate_easy_problem_with<R: Rng + ?Sized>(rng: &mut R) -> Result<Problem> {
    match rng.random_range(0..5u32) {
        0 => power::generate(rng),
        1 => power_sum::generate(rng),
        2 => linear_power::generate(rng),
        3 => exponential::generate(rng),
        _ => trig::generate(rng),
    }
}

/// Generate one EASY substitution problem from the thread-local RNG.
pub fn generate_easy_problem() -> Result<Problem> {
    generate_easy_problem_with(&mut rand::rng())
}

/// Generate `count` independent problems from one random source.
pub fn generate_batch<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<Problem>> {
    (0..count).map(|_| generate_easy_problem_with(rng)).collect()
}
