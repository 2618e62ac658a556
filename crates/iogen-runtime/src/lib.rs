//! Biased sampling, interestingness filtering, the generation driver, and
//! the input-type verifier.
//!
//! # Modules
//!
//! - `executor`: `catch_unwind`-guarded program execution
//! - `sampler`: `BiasedSampler`
//! - `filter`: output variance and frequency-aware duplicate pruning
//! - `driver`: `GenerationConfig`/`generate_interesting`, the task state machine
//! - `verify`: the input-type verifier
//! - `error`: `EvalFault`, `VerifyFault`

pub mod driver;
pub mod error;
pub mod executor;
pub mod filter;
pub mod sampler;
pub mod verify;

pub use driver::{generate_interesting, DriverError, GenerationConfig, GenerationResult};
pub use error::{EvalFault, VerifyFault};
pub use filter::Pair;
pub use sampler::BiasedSampler;
