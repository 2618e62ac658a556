//! The DSL catalogues: named operations with evaluators and bounds rules.
//!
//! # Modules
//!
//! - `function`: the `Function` record and its `EvalFn`/`BoundsFn` aliases
//! - `bounds`: shared interval-arithmetic helpers
//! - `lambdas`: the scalar ops/predicates that higher-order forms specialize over
//! - `simple`, `extended`, `linq`: the three catalogues
//! - `registry`: `Language` selection and name-indexed lookup

pub mod bounds;
pub mod extended;
pub mod function;
pub mod lambdas;
pub mod linq;
pub mod registry;
pub mod simple;

pub use function::{Function, Interval};
pub use registry::{DslRegistry, Language};
