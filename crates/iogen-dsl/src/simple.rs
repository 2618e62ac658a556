//! The minimal list DSL: `head`, `last`, `tail`, `count`, `len`.

use crate::function::Function;
use iogen_core::{Type, Value};
use std::sync::Arc;

/// Builds the simple catalogue. `max_bound` is captured by the operations
/// that return the null sentinel on an empty or out-of-range input.
pub fn simple_dsl(max_bound: i64) -> Vec<Arc<Function>> {
    vec![
        Function::new(
            "head",
            vec![Type::TSeq, Type::TInt],
            move |args| {
                let xs = args[0].as_seq().expect("head: TSeq argument");
                xs.first().map_or_else(|| Value::null(max_bound), |x| Value::Int(*x))
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "last",
            vec![Type::TSeq, Type::TInt],
            move |args| {
                let xs = args[0].as_seq().expect("last: TSeq argument");
                xs.last().map_or_else(|| Value::null(max_bound), |x| Value::Int(*x))
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "tail",
            vec![Type::TSeq, Type::TSeq],
            move |args| {
                let xs = args[0].as_seq().expect("tail: TSeq argument");
                if xs.is_empty() {
                    Value::null(max_bound)
                } else {
                    Value::Seq(xs[1..].to_vec())
                }
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "count",
            vec![Type::TInt, Type::TSeq, Type::TInt],
            |args| {
                let n = args[0].as_int().expect("count: TInt argument");
                let xs = args[1].as_seq().expect("count: TSeq argument");
                Value::Int(xs.iter().filter(|x| **x == n).count() as i64)
            },
            |lo, hi, max_len| vec![(0, max_len), (lo, hi)],
        ),
        Function::new(
            "len",
            vec![Type::TSeq, Type::TInt],
            |args| {
                let xs = args[0].as_seq().expect("len: TSeq argument");
                Value::Int(xs.len() as i64)
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(dsl: &'a [Arc<Function>], name: &str) -> &'a Arc<Function> {
        dsl.iter().find(|f| f.name == name).expect("present")
    }

    #[test]
    fn head_of_empty_is_null() {
        let dsl = simple_dsl(10);
        let head = find(&dsl, "head");
        assert_eq!((head.eval)(&[Value::Seq(vec![])]), Value::Int(10));
        assert_eq!((head.eval)(&[Value::Seq(vec![3, 5])]), Value::Int(3));
    }

    #[test]
    fn tail_drops_first_element() {
        let dsl = simple_dsl(10);
        let tail = find(&dsl, "tail");
        assert_eq!(
            (tail.eval)(&[Value::Seq(vec![3, 5, 4])]),
            Value::Seq(vec![5, 4])
        );
    }

    #[test]
    fn count_matches_python_filter_semantics() {
        let dsl = simple_dsl(10);
        let count = find(&dsl, "count");
        assert_eq!(
            (count.eval)(&[Value::Int(5), Value::Seq(vec![3, 5, 4, 7, 5])]),
            Value::Int(2)
        );
    }
}
