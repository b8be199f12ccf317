pub mod analyzer;
pub mod evaluator;
pub mod fibonacci;
pub mod indicators;

#[cfg(test)]
mod indicators_tests;

pub use analyzer::*;
pub use evaluator::*;
pub use fibonacci::*;
pub use indicators::*;
