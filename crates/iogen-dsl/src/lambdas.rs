//! Scalar building blocks: the unary/binary integer ops and int predicates
//! that `map`, `filter`, `count`, `zipwith` and `scanl1` specialize over.
//!
//! These are kept separate from [`crate::function::Function`] because their
//! bounds rules operate on a single `(lo, hi)` output interval rather than
//! the `(lo, hi, max_len)` triple a full catalogue entry receives — the
//! higher-order forms in `extended.rs`/`linq.rs` plug `max_len` in only
//! where the combinator shape (e.g. `scanl1`) actually needs it.

use crate::bounds::{add_sub_bounds, mul_bounds};
use crate::function::Interval;

/// A unary `int -> int` scalar op, e.g. `INC`, `SHL`, `doNEG`.
pub struct UnaryOp {
    pub name: &'static str,
    pub eval: fn(i64) -> i64,
    pub bounds: fn(i64, i64) -> Interval,
}

/// A binary `int -> int -> int` scalar op, e.g. `+`, `*`, `MIN`.
pub struct BinaryOp {
    pub name: &'static str,
    pub eval: fn(i64, i64) -> i64,
    pub bounds: fn(i64, i64) -> Interval,
}

/// A unary `int -> bool` predicate, e.g. `isEVEN`.
pub struct Predicate {
    pub name: &'static str,
    pub eval: fn(i64) -> bool,
    pub bounds: fn(i64, i64) -> Interval,
}

fn identity_bounds(lo: i64, hi: i64) -> Interval {
    (lo, hi)
}

/// `IDT, INC, DEC, SHL, SHR, doNEG, MUL3, DIV3, MUL4, DIV4, SQR`.
pub fn unary_ops() -> Vec<UnaryOp> {
    vec![
        UnaryOp {
            name: "IDT",
            eval: |i| i,
            bounds: identity_bounds,
        },
        UnaryOp {
            name: "INC",
            eval: |i| i + 1,
            bounds: |lo, hi| (lo, hi - 1),
        },
        UnaryOp {
            name: "DEC",
            eval: |i| i - 1,
            bounds: |lo, hi| (lo + 1, hi),
        },
        UnaryOp {
            name: "SHL",
            eval: |i| i * 2,
            bounds: |lo, hi| ((lo + 1) / 2, hi / 2),
        },
        UnaryOp {
            name: "SHR",
            eval: |i| i / 2,
            bounds: |lo, hi| (2 * lo, 2 * hi),
        },
        UnaryOp {
            name: "doNEG",
            eval: |i| -i,
            bounds: |lo, hi| (-hi + 1, -lo + 1),
        },
        UnaryOp {
            name: "MUL3",
            eval: |i| i * 3,
            bounds: |lo, hi| ((lo + 2) / 3, hi / 3),
        },
        UnaryOp {
            name: "DIV3",
            eval: |i| i / 3,
            bounds: identity_bounds,
        },
        UnaryOp {
            name: "MUL4",
            eval: |i| i * 4,
            bounds: |lo, hi| ((lo + 3) / 4, hi / 4),
        },
        UnaryOp {
            name: "DIV4",
            eval: |i| i / 4,
            bounds: identity_bounds,
        },
        UnaryOp {
            name: "SQR",
            eval: |i| i * i,
            bounds: |lo, hi| crate::bounds::sqr_bounds(lo, hi),
        },
    ]
}

/// `+, -, *, MIN, MAX`.
pub fn binary_ops() -> Vec<BinaryOp> {
    vec![
        BinaryOp {
            name: "+",
            eval: |i, j| i + j,
            bounds: |lo, hi| add_sub_bounds(lo, hi),
        },
        BinaryOp {
            name: "-",
            eval: |i, j| i - j,
            bounds: |lo, hi| add_sub_bounds(lo, hi),
        },
        BinaryOp {
            name: "*",
            eval: |i, j| i * j,
            bounds: |lo, hi| mul_bounds(lo, hi),
        },
        BinaryOp {
            name: "MIN",
            eval: |i, j| i.min(j),
            bounds: identity_bounds,
        },
        BinaryOp {
            name: "MAX",
            eval: |i, j| i.max(j),
            bounds: identity_bounds,
        },
    ]
}

/// `isPOS, isNEG, isODD, isEVEN`.
pub fn predicates() -> Vec<Predicate> {
    vec![
        Predicate {
            name: "isPOS",
            eval: |i| i > 0,
            bounds: identity_bounds,
        },
        Predicate {
            name: "isNEG",
            eval: |i| i < 0,
            bounds: identity_bounds,
        },
        Predicate {
            name: "isODD",
            eval: |i| i.rem_euclid(2) == 1,
            bounds: identity_bounds,
        },
        Predicate {
            name: "isEVEN",
            eval: |i| i.rem_euclid(2) == 0,
            bounds: identity_bounds,
        },
    ]
}
