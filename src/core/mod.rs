//! Core types: RNG and generator configuration.

pub mod config;
pub mod rng;

pub use config::{GeneratorConfig, IdPolicy, DEFAULT_INITIAL_BATCH};
pub use rng::{CardRng, CardRngState};
