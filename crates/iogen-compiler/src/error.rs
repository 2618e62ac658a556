//! Compiler error type, following the manual `Display`/`Error` pattern used
//! throughout this workspace rather than a derive-macro crate.

use iogen_core::Type;
use std::fmt;

#[derive(Debug)]
pub enum CompileError {
    /// A source line did not match `<letter> <- <instruction>`.
    MalformedLine { line: usize, text: String },
    /// A line's register letter skipped ahead of the next expected slot.
    OutOfOrderRegister { line: usize, expected: char, found: char },
    /// A line referenced an operation absent from the active DSL.
    UnknownOperation { line: usize, name: String },
    /// A line supplied the wrong number of arguments for an operation.
    ArityMismatch {
        line: usize,
        operation: String,
        expected: usize,
        found: usize,
    },
    /// A line referenced a register letter beyond those declared so far.
    UnknownRegister { line: usize, letter: char },
    /// An argument register's type did not match the operation's signature.
    TypeMismatch {
        line: usize,
        operation: String,
        position: usize,
        expected: Type,
        found: Type,
    },
    /// Backward bound propagation left an input register with an empty, or
    /// too narrow, legal range.
    InfeasibleInputRange {
        register: usize,
        min_range_length: i64,
    },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::MalformedLine { line, text } => {
                write!(f, "line {line}: malformed instruction `{text}`")
            }
            CompileError::OutOfOrderRegister { line, expected, found } => write!(
                f,
                "line {line}: expected register `{expected}`, found `{found}`"
            ),
            CompileError::UnknownOperation { line, name } => {
                write!(f, "line {line}: unknown operation `{name}`")
            }
            CompileError::ArityMismatch {
                line,
                operation,
                expected,
                found,
            } => write!(
                f,
                "line {line}: `{operation}` expects {expected} argument(s), found {found}"
            ),
            CompileError::UnknownRegister { line, letter } => {
                write!(f, "line {line}: register `{letter}` has not been declared yet")
            }
            CompileError::TypeMismatch {
                line,
                operation,
                position,
                expected,
                found,
            } => write!(
                f,
                "line {line}: `{operation}` argument {position} expects {expected}, found {found}"
            ),
            CompileError::InfeasibleInputRange {
                register,
                min_range_length,
            } => write!(
                f,
                "input register {register} has no legal range of length >= {min_range_length}"
            ),
        }
    }
}

impl std::error::Error for CompileError {}
