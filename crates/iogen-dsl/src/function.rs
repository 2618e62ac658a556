//! Named operation records: the unit the DSL registry is built from.

use iogen_core::{Type, Value};
use std::fmt;
use std::sync::Arc;

/// Inclusive integer interval `(lo, hi)`.
pub type Interval = (i64, i64);

/// Pure evaluator over a function's signature. Given already type-checked
/// arguments (the compiler guarantees `args[i]` matches `sig[i]`), produces
/// the result value.
pub type EvalFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Bounds rule: given the output interval `(lo, hi)` and the configured
/// maximum list length `L`, returns one tightened interval per parameter, in
/// signature order. Must always return exactly `sig.len() - 1` intervals and
/// must be total — infeasible ranges collapse to `(0, 0)`, never a panic.
pub type BoundsFn = Arc<dyn Fn(i64, i64, i64) -> Vec<Interval> + Send + Sync>;

/// An immutable named operation: source token, type signature, evaluator and
/// bounds rule. `name` may contain a space for higher-order forms
/// (`"map +"`, `"FILTER isEVEN"`).
#[derive(Clone)]
pub struct Function {
    pub name: String,
    /// Parameter types followed by the result type; never empty.
    pub sig: Vec<Type>,
    pub eval: EvalFn,
    pub bounds: BoundsFn,
}

impl Function {
    pub fn new(
        name: impl Into<String>,
        sig: Vec<Type>,
        eval: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
        bounds: impl Fn(i64, i64, i64) -> Vec<Interval> + Send + Sync + 'static,
    ) -> Arc<Function> {
        assert!(!sig.is_empty(), "signature must declare a result type");
        Arc::new(Function {
            name: name.into(),
            sig,
            eval: Arc::new(eval),
            bounds: Arc::new(bounds),
        })
    }

    /// Number of parameters (signature length minus the result type).
    pub fn arity(&self) -> usize {
        self.sig.len() - 1
    }

    pub fn param_types(&self) -> &[Type] {
        &self.sig[..self.sig.len() - 1]
    }

    pub fn result_type(&self) -> Type {
        *self.sig.last().expect("non-empty signature")
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("sig", &self.sig)
            .finish_non_exhaustive()
    }
}
