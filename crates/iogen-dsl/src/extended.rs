//! The extended catalogue: arithmetic, sequence statistics, and the `map`
//! specialization hook.
//!
//! The reference generator specializes `map` over whichever of its local
//! `+`/`-`/`*` lambdas happen to have a unary `(int) -> int` signature. All
//! three are binary, so that specialization set is empty here — `map` never
//! actually appears in programs compiled against this catalogue. This
//! mirrors the reference behavior rather than "fixing" it; `linq.rs` is
//! where `map`/`filter` actually specialize over a real pool of unary ops
//! and predicates.

use crate::bounds::{add_sub_bounds, mul_bounds, sum_bounds};
use crate::function::Function;
use iogen_core::{Type, Value};
use std::sync::Arc;

pub fn extended_dsl(max_bound: i64) -> Vec<Arc<Function>> {
    let mut dsl = super::simple::simple_dsl(max_bound);

    dsl.extend([
        Function::new(
            "max",
            vec![Type::TSeq, Type::TInt],
            |args| {
                let xs = args[0].as_seq().expect("max: TSeq argument");
                Value::Int(*xs.iter().max().expect("non-empty input"))
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "min",
            vec![Type::TSeq, Type::TInt],
            |args| {
                let xs = args[0].as_seq().expect("min: TSeq argument");
                Value::Int(*xs.iter().min().expect("non-empty input"))
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "reverse",
            vec![Type::TSeq, Type::TSeq],
            |args| {
                let xs = args[0].as_seq().expect("reverse: TSeq argument");
                Value::Seq(xs.iter().rev().copied().collect())
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "sort",
            vec![Type::TSeq, Type::TSeq],
            |args| {
                let xs = args[0].as_seq().expect("sort: TSeq argument");
                let mut sorted = xs.to_vec();
                sorted.sort_unstable();
                Value::Seq(sorted)
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "unique",
            vec![Type::TSeq, Type::TSeq],
            |args| {
                let xs = args[0].as_seq().expect("unique: TSeq argument");
                let mut seen = std::collections::HashSet::new();
                let mut out = Vec::new();
                for x in xs {
                    if seen.insert(*x) {
                        out.push(*x);
                    }
                }
                Value::Seq(out)
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "sum",
            vec![Type::TSeq, Type::TInt],
            |args| {
                let xs = args[0].as_seq().expect("sum: TSeq argument");
                Value::Int(xs.iter().sum())
            },
            |lo, hi, max_len| vec![sum_bounds(lo, hi, max_len)],
        ),
        Function::new(
            "index",
            vec![Type::TInt, Type::TSeq, Type::TInt],
            move |args| {
                let n = args[0].as_int().expect("index: TInt argument");
                let xs = args[1].as_seq().expect("index: TSeq argument");
                if n >= 0 && (n as usize) < xs.len() {
                    Value::Int(xs[n as usize])
                } else {
                    Value::null(max_bound)
                }
            },
            |lo, hi, max_len| vec![(0, max_len), (lo, hi)],
        ),
        Function::new(
            "*",
            vec![Type::TInt, Type::TInt, Type::TInt],
            |args| {
                let i = args[0].as_int().expect("*: TInt argument");
                let j = args[1].as_int().expect("*: TInt argument");
                Value::Int(i * j)
            },
            |lo, hi, _l| {
                let b = mul_bounds(lo, hi);
                vec![b, b]
            },
        ),
        Function::new(
            "+",
            vec![Type::TInt, Type::TInt, Type::TInt],
            |args| {
                let i = args[0].as_int().expect("+: TInt argument");
                let j = args[1].as_int().expect("+: TInt argument");
                Value::Int(i + j)
            },
            |lo, hi, _l| {
                let b = add_sub_bounds(lo, hi);
                vec![b, b]
            },
        ),
        Function::new(
            "-",
            vec![Type::TInt, Type::TInt, Type::TInt],
            |args| {
                let i = args[0].as_int().expect("-: TInt argument");
                let j = args[1].as_int().expect("-: TInt argument");
                Value::Int(i - j)
            },
            |lo, hi, _l| {
                let b = add_sub_bounds(lo, hi);
                vec![b, b]
            },
        ),
    ]);

    dsl
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(dsl: &'a [Arc<Function>], name: &str) -> &'a Arc<Function> {
        dsl.iter().find(|f| f.name == name).expect("present")
    }

    #[test]
    fn sum_matches_reference_example() {
        let dsl = extended_dsl(99);
        let sum = find(&dsl, "sum");
        assert_eq!(
            (sum.eval)(&[Value::Seq(vec![3, 5, 4, 7, 5])]),
            Value::Int(24)
        );
        assert_eq!((sum.bounds)(1, 49, 5), vec![(1, 9)]);
    }

    #[test]
    fn index_out_of_range_is_null() {
        let dsl = extended_dsl(10);
        let index = find(&dsl, "index");
        assert_eq!(
            (index.eval)(&[Value::Int(1), Value::Seq(vec![3, 5, 4, 7, 5])]),
            Value::Int(5)
        );
        assert_eq!(
            (index.eval)(&[Value::Int(50), Value::Seq(vec![3, 5])]),
            Value::Int(10)
        );
    }

    #[test]
    fn unique_preserves_first_occurrence_order() {
        let dsl = extended_dsl(10);
        let unique = find(&dsl, "unique");
        assert_eq!(
            (unique.eval)(&[Value::Seq(vec![3, 5, 3, 4, 5])]),
            Value::Seq(vec![3, 5, 4])
        );
    }
}
