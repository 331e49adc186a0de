//! Signal evaluation interfaces.

pub mod crossover;
pub mod engine;

pub use engine::compute_signal;
