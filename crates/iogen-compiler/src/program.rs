//! The compiled program: a flat register file plus a legal input-range
//! table, produced by [`crate::compile_program`].

use iogen_core::{Type, Value};
use iogen_dsl::Function;
use std::fmt;
use std::sync::Arc;

/// One register slot. The first `input_length` registers of a program are
/// always [`Register::Input`]; the rest are [`Register::Call`].
#[derive(Clone)]
pub enum Register {
    /// An argument register, filled by the caller before execution.
    Input(Type),
    /// A computed register: apply `function` to the named earlier registers.
    Call {
        function: Arc<Function>,
        args: Vec<usize>,
    },
}

impl Register {
    pub fn result_type(&self) -> Type {
        match self {
            Register::Input(ty) => *ty,
            Register::Call { function, .. } => function.result_type(),
        }
    }
}

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::Input(ty) => write!(f, "Input({ty})"),
            Register::Call { function, args } => {
                write!(f, "Call({}, {:?})", function.name, args)
            }
        }
    }
}

/// A parsed and constraint-propagated program, ready to execute.
#[derive(Clone)]
pub struct Program {
    pub source: String,
    pub registers: Vec<Register>,
    pub input_length: usize,
    /// Legal input range per input register, in declaration order.
    pub bounds: Vec<(i64, i64)>,
}

impl Program {
    pub fn input_types(&self) -> Vec<Type> {
        self.registers[..self.input_length]
            .iter()
            .map(Register::result_type)
            .collect()
    }

    pub fn output_type(&self) -> Type {
        self.registers
            .last()
            .expect("a compiled program has at least one register")
            .result_type()
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("source", &self.source)
            .field("input_length", &self.input_length)
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source.replace('\n', " | "))
    }
}

/// Evaluates a compiled program against a full set of input values, in
/// register order. Never panics on well-typed input — the executor in
/// `iogen-runtime` is responsible for catching evaluator panics on
/// malformed input and converting them into a typed fault.
pub fn execute(program: &Program, inputs: &[Value]) -> Value {
    assert_eq!(inputs.len(), program.input_length, "input arity mismatch");
    let mut registers: Vec<Option<Value>> = vec![None; program.registers.len()];
    for (i, v) in inputs.iter().enumerate() {
        registers[i] = Some(v.clone());
    }
    for (t, register) in program.registers.iter().enumerate().skip(program.input_length) {
        let Register::Call { function, args } = register else {
            unreachable!("registers beyond input_length are always Call");
        };
        let arg_values: Vec<Value> = args
            .iter()
            .map(|&p| registers[p].clone().expect("register computed before use"))
            .collect();
        registers[t] = Some((function.eval)(&arg_values));
    }
    registers
        .last()
        .cloned()
        .flatten()
        .expect("a compiled program has at least one register")
}
