//! Backward interval propagation: starting from the widest possible range
//! on every register, tighten each input register's legal range by walking
//! the program from its last instruction back to its first.

use crate::error::CompileError;
use crate::program::Register;

/// Computes the legal range for every register, given in register order.
/// `max_len` is the configured maximum sequence length a `[int]`-typed
/// register may have; when `None`, propagation is skipped entirely and
/// every register keeps the full `(min_bound, max_bound)` range.
pub fn propagate_constraints(
    registers: &[Register],
    input_length: usize,
    min_bound: i64,
    max_bound: i64,
    max_len: Option<i64>,
    min_input_range_length: i64,
) -> Result<Vec<(i64, i64)>, CompileError> {
    let mut limits = vec![(min_bound, max_bound); registers.len()];
    let Some(max_len) = max_len else {
        return Ok(limits);
    };

    for t in (0..registers.len()).rev() {
        if t >= input_length {
            let Register::Call { function, args } = &registers[t] else {
                unreachable!("registers beyond input_length are always Call");
            };
            let (lo, hi) = limits[t];
            let new_limits = (function.bounds)(lo, hi, max_len);
            for (a, &p) in args.iter().enumerate() {
                let (candidate_lo, candidate_hi) = new_limits[a];
                let (cur_lo, cur_hi) = limits[p];
                limits[p] = (cur_lo.max(candidate_lo), cur_hi.min(candidate_hi));
            }
        } else {
            let (lo, hi) = limits[t];
            if min_input_range_length >= hi - lo {
                return Err(CompileError::InfeasibleInputRange {
                    register: t,
                    min_range_length: min_input_range_length,
                });
            }
        }
    }

    Ok(limits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iogen_compiler_test_support::*;

    #[test]
    fn sum_tightens_to_per_element_average() {
        let registers = sum_program();
        let limits = propagate_constraints(&registers, 1, 0, 99, Some(10), 0).unwrap();
        assert_eq!(limits[0], (1, 9));
    }

    #[test]
    fn add_last_tightens_both_operands_identically() {
        let registers = add_last_program();
        let limits = propagate_constraints(&registers, 2, 0, 10, Some(10), 0).unwrap();
        assert_eq!(&limits[..2], &[(1, 5), (1, 5)]);
    }
}

#[cfg(test)]
mod iogen_compiler_test_support {
    use super::Register;
    use iogen_dsl::{DslRegistry, Language};

    /// `a <- [int] | b <- sum a`
    pub fn sum_program() -> Vec<Register> {
        let registry = DslRegistry::build(Language::Extended, 99);
        vec![
            Register::Input(iogen_core::Type::TSeq),
            Register::Call {
                function: registry.get("sum").unwrap().clone(),
                args: vec![0],
            },
        ]
    }

    /// `a <- [int] | b <- int | c <- last a | d <- + b c`
    pub fn add_last_program() -> Vec<Register> {
        let registry = DslRegistry::build(Language::Extended, 10);
        vec![
            Register::Input(iogen_core::Type::TSeq),
            Register::Input(iogen_core::Type::TInt),
            Register::Call {
                function: registry.get("last").unwrap().clone(),
                args: vec![0],
            },
            Register::Call {
                function: registry.get("+").unwrap().clone(),
                args: vec![1, 2],
            },
        ]
    }
}
