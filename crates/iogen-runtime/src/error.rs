//! Runtime fault types: evaluation panics and verifier failures, each
//! carrying enough context to reproduce the failing call.

use iogen_core::Value;
use std::fmt;

/// An evaluator panicked on otherwise well-typed input. This should be
/// unreachable for any program that compiled successfully, but the executor
/// converts it into a typed fault rather than unwinding past the task
/// boundary.
#[derive(Debug)]
pub struct EvalFault {
    pub function: String,
    pub args: Vec<Value>,
    pub message: String,
}

impl fmt::Display for EvalFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "evaluator for `{}` panicked on args {:?}: {}",
            self.function, self.args, self.message
        )
    }
}

impl std::error::Error for EvalFault {}

/// A sampled or produced value failed to satisfy its declared type
/// signature.
#[derive(Debug)]
pub struct VerifyFault {
    pub expected: String,
    pub value: String,
}

impl fmt::Display for VerifyFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value `{}` does not satisfy declared type `{}`",
            self.value, self.expected
        )
    }
}

impl std::error::Error for VerifyFault {}
