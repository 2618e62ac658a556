//! Runs a compiled program against sampled inputs, converting an evaluator
//! panic into a typed [`EvalFault`] instead of letting it unwind past the
//! task boundary.

use crate::error::EvalFault;
use iogen_compiler::Program;
use iogen_core::Value;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Evaluates `program` against `inputs`. `Value` and `Program` hold no
/// interior mutability, so the unwind-safety assertion is sound: a caught
/// panic leaves no half-mutated state for a later call to observe.
pub fn run(program: &Program, inputs: &[Value]) -> Result<Value, EvalFault> {
    catch_unwind(AssertUnwindSafe(|| iogen_compiler::execute(program, inputs))).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        EvalFault {
            function: program.to_string(),
            args: inputs.to_vec(),
            message,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use iogen_dsl::{DslRegistry, Language};

    #[test]
    fn well_typed_program_runs_cleanly() {
        let registry = DslRegistry::build(Language::Simple, 10);
        let program =
            iogen_compiler::compile_program(&registry, "a <- [int]\nb <- head a", 10, Some(10), 0, Some(0))
                .unwrap();
        let result = run(&program, &[Value::Seq(vec![7, 2])]).unwrap();
        assert_eq!(result, Value::Int(7));
    }
}
