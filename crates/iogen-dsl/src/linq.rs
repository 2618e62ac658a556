//! The LINQ-flavored catalogue: the richest of the three, with `MAP`,
//! `FILTER`, `COUNT`, `ZIPWITH` and `SCANL1` specialized over the full pool
//! of scalar lambdas in `lambdas.rs`.

use crate::bounds::scanl1_bounds;
use crate::function::Function;
use crate::lambdas::{binary_ops, predicates, unary_ops};
use iogen_core::{Type, Value};
use std::sync::Arc;

pub fn linq_dsl(max_bound: i64) -> Vec<Arc<Function>> {
    let null = max_bound;
    let mut dsl: Vec<Arc<Function>> = vec![
        Function::new(
            "REVERSE",
            vec![Type::TSeq, Type::TSeq],
            |args| {
                let xs = args[0].as_seq().expect("REVERSE: TSeq argument");
                Value::Seq(xs.iter().rev().copied().collect())
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "SORT",
            vec![Type::TSeq, Type::TSeq],
            |args| {
                let xs = args[0].as_seq().expect("SORT: TSeq argument");
                let mut sorted = xs.to_vec();
                sorted.sort_unstable();
                Value::Seq(sorted)
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "TAKE",
            vec![Type::TInt, Type::TSeq, Type::TSeq],
            |args| {
                let n = args[0].as_int().expect("TAKE: TInt argument").max(0) as usize;
                let xs = args[1].as_seq().expect("TAKE: TSeq argument");
                Value::Seq(xs.iter().take(n).copied().collect())
            },
            |lo, hi, max_len| vec![(0, max_len), (lo, hi)],
        ),
        Function::new(
            "DROP",
            vec![Type::TInt, Type::TSeq, Type::TSeq],
            |args| {
                let n = args[0].as_int().expect("DROP: TInt argument").max(0) as usize;
                let xs = args[1].as_seq().expect("DROP: TSeq argument");
                Value::Seq(xs.iter().skip(n).copied().collect())
            },
            |lo, hi, max_len| vec![(0, max_len), (lo, hi)],
        ),
        Function::new(
            "ACCESS",
            vec![Type::TInt, Type::TSeq, Type::TInt],
            move |args| {
                let n = args[0].as_int().expect("ACCESS: TInt argument");
                let xs = args[1].as_seq().expect("ACCESS: TSeq argument");
                if n >= 0 && (n as usize) < xs.len() {
                    Value::Int(xs[n as usize])
                } else {
                    Value::null(null)
                }
            },
            |lo, hi, max_len| vec![(0, max_len), (lo, hi)],
        ),
        Function::new(
            "COUNT",
            vec![Type::TInt, Type::TSeq, Type::TInt],
            |args| {
                let n = args[0].as_int().expect("COUNT: TInt argument");
                let xs = args[1].as_seq().expect("COUNT: TSeq argument");
                Value::Int(xs.iter().filter(|x| **x == n).count() as i64)
            },
            |lo, hi, max_len| vec![(0, max_len), (lo, hi)],
        ),
        Function::new(
            "TAIL",
            vec![Type::TSeq, Type::TSeq],
            move |args| {
                let xs = args[0].as_seq().expect("TAIL: TSeq argument");
                if xs.is_empty() {
                    Value::null(null)
                } else {
                    Value::Seq(xs[1..].to_vec())
                }
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "HEAD",
            vec![Type::TSeq, Type::TInt],
            move |args| {
                let xs = args[0].as_seq().expect("HEAD: TSeq argument");
                xs.first().map_or_else(|| Value::null(null), |x| Value::Int(*x))
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "LAST",
            vec![Type::TSeq, Type::TInt],
            move |args| {
                let xs = args[0].as_seq().expect("LAST: TSeq argument");
                xs.last().map_or_else(|| Value::null(null), |x| Value::Int(*x))
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "MINIMUM",
            vec![Type::TSeq, Type::TInt],
            move |args| {
                let xs = args[0].as_seq().expect("MINIMUM: TSeq argument");
                xs.iter().min().map_or_else(|| Value::null(null), |x| Value::Int(*x))
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "LEN",
            vec![Type::TSeq, Type::TInt],
            |args| {
                let xs = args[0].as_seq().expect("LEN: TSeq argument");
                Value::Int(xs.len() as i64)
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "MAXIMUM",
            vec![Type::TSeq, Type::TInt],
            move |args| {
                let xs = args[0].as_seq().expect("MAXIMUM: TSeq argument");
                xs.iter().max().map_or_else(|| Value::null(null), |x| Value::Int(*x))
            },
            |lo, hi, _l| vec![(lo, hi)],
        ),
        Function::new(
            "SUM",
            vec![Type::TSeq, Type::TInt],
            |args| {
                let xs = args[0].as_seq().expect("SUM: TSeq argument");
                Value::Int(xs.iter().sum())
            },
            |lo, hi, max_len| vec![(lo / max_len + 1, hi / max_len)],
        ),
    ];

    for op in unary_ops() {
        let name = format!("MAP {}", op.name);
        let eval_fn = op.eval;
        let bounds_fn = op.bounds;
        dsl.push(Function::new(
            name,
            vec![Type::TSeq, Type::TSeq],
            move |args| {
                let xs = args[0].as_seq().expect("MAP: TSeq argument");
                Value::Seq(xs.iter().map(|x| eval_fn(*x)).collect())
            },
            move |lo, hi, _l| vec![bounds_fn(lo, hi)],
        ));
    }

    for pred in predicates() {
        let name = format!("FILTER {}", pred.name);
        let eval_fn = pred.eval;
        dsl.push(Function::new(
            name,
            vec![Type::TSeq, Type::TSeq],
            move |args| {
                let xs = args[0].as_seq().expect("FILTER: TSeq argument");
                Value::Seq(xs.iter().copied().filter(|x| eval_fn(*x)).collect())
            },
            |lo, hi, _l| vec![(lo, hi)],
        ));
    }

    for pred in predicates() {
        let name = format!("COUNT {}", pred.name);
        let eval_fn = pred.eval;
        dsl.push(Function::new(
            name,
            vec![Type::TSeq, Type::TInt],
            move |args| {
                let xs = args[0].as_seq().expect("COUNT <pred>: TSeq argument");
                Value::Int(xs.iter().filter(|x| eval_fn(**x)).count() as i64)
            },
            move |_lo, _hi, _l| vec![(-max_bound, max_bound)],
        ));
    }

    for op in binary_ops() {
        let name = format!("ZIPWITH {}", op.name);
        let eval_fn = op.eval;
        let bounds_fn = op.bounds;
        dsl.push(Function::new(
            name,
            vec![Type::TSeq, Type::TSeq, Type::TSeq],
            move |args| {
                let xs = args[0].as_seq().expect("ZIPWITH: TSeq argument");
                let ys = args[1].as_seq().expect("ZIPWITH: TSeq argument");
                Value::Seq(
                    xs.iter()
                        .zip(ys.iter())
                        .map(|(x, y)| eval_fn(*x, *y))
                        .collect(),
                )
            },
            move |lo, hi, _l| {
                let b = bounds_fn(lo, hi);
                vec![b, b]
            },
        ));
    }

    for op in binary_ops() {
        if !matches!(op.name, "+" | "-" | "*" | "MIN" | "MAX") {
            continue;
        }
        let name = format!("SCANL1 {}", op.name);
        let eval_fn = op.eval;
        let op_name = op.name;
        dsl.push(Function::new(
            name,
            vec![Type::TSeq, Type::TSeq],
            move |args| {
                let xs = args[0].as_seq().expect("SCANL1: TSeq argument");
                let mut out = Vec::with_capacity(xs.len());
                let mut acc = None;
                for x in xs {
                    acc = Some(match acc {
                        None => *x,
                        Some(r) => eval_fn(r, *x),
                    });
                    out.push(acc.expect("just assigned"));
                }
                Value::Seq(out)
            },
            move |lo, hi, max_len| vec![scanl1_bounds(op_name, lo, hi, max_len)],
        ));
    }

    dsl
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(dsl: &'a [Arc<Function>], name: &str) -> &'a Arc<Function> {
        dsl.iter().find(|f| f.name == name).expect("present")
    }

    #[test]
    fn map_inc_matches_reference() {
        let dsl = linq_dsl(10);
        let map_inc = find(&dsl, "MAP INC");
        assert_eq!(
            (map_inc.eval)(&[Value::Seq(vec![1, 2, 3])]),
            Value::Seq(vec![2, 3, 4])
        );
    }

    #[test]
    fn filter_even_keeps_even_values() {
        let dsl = linq_dsl(10);
        let filter_even = find(&dsl, "FILTER isEVEN");
        assert_eq!(
            (filter_even.eval)(&[Value::Seq(vec![8, 7, 20, 1, 8])]),
            Value::Seq(vec![8, 20, 8])
        );
    }

    #[test]
    fn scanl1_plus_is_a_running_sum() {
        let dsl = linq_dsl(10);
        let scan = find(&dsl, "SCANL1 +");
        assert_eq!(
            (scan.eval)(&[Value::Seq(vec![1, 2, 3, 4])]),
            Value::Seq(vec![1, 3, 6, 10])
        );
    }

    #[test]
    fn access_out_of_range_is_null() {
        let dsl = linq_dsl(10);
        let access = find(&dsl, "ACCESS");
        assert_eq!(
            (access.eval)(&[Value::Int(5), Value::Seq(vec![1, 2])]),
            Value::Int(10)
        );
    }
}
