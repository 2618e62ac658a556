//! Parses DSL source into a [`Program`] and propagates legal input ranges.
//!
//! # Modules
//!
//! - `parser`: source text to a register list
//! - `program`: the `Register`/`Program` types and the straight-line executor
//! - `propagate`: backward interval propagation over a register list
//! - `error`: `CompileError`

pub mod error;
pub mod parser;
pub mod program;
pub mod propagate;

pub use error::CompileError;
pub use program::{execute, Program, Register};

use iogen_dsl::DslRegistry;

/// Compiles `source` (register letters assigned in order, one instruction
/// per line, a blank-separated `<letter> <- <instruction>` form) against
/// `registry`.
///
/// `max_len` bounds the legal length of `[int]`-typed registers and is the
/// divisor/root several catalogue bounds rules use (`sum`, `SCANL1 *`, ...);
/// passing `None` skips propagation entirely and every register keeps the
/// full `(min_bound, max_bound)` range. `min_bound` defaults to `-max_bound`
/// when unset, matching the library-level default from the reference
/// generator; callers that want the CLI's effective default of `0` should
/// pass `Some(0)` explicitly.
#[allow(clippy::too_many_arguments)]
pub fn compile_program(
    registry: &DslRegistry,
    source: &str,
    max_bound: i64,
    max_len: Option<i64>,
    min_input_range_length: i64,
    min_bound: Option<i64>,
) -> Result<Program, CompileError> {
    let (registers, input_length) = parser::parse_source(registry, source)?;
    let min_bound = min_bound.unwrap_or(-max_bound);
    let bounds = propagate::propagate_constraints(
        &registers,
        input_length,
        min_bound,
        max_bound,
        max_len,
        min_input_range_length,
    )?;
    let input_bounds = bounds[..input_length].to_vec();
    Ok(Program {
        source: source.to_string(),
        registers,
        input_length,
        bounds: input_bounds,
    })
}
