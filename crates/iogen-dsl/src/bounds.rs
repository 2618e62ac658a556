//! Pure interval-arithmetic helpers shared by the bounds rules of several
//! catalogue entries. Each function mirrors one bound formula from the
//! reference implementation; none of them touch a [`Function`](crate::function::Function)
//! directly, so they're covered by focused unit tests independent of the
//! registry.

use crate::function::Interval;

/// Bound on `x` such that `x * x` (or any monotone-below-zero square-like
/// op) lands in `[lower_bound, upper_bound)`. Used by `*` (product) and
/// `SQR`.
pub fn sqr_bounds(lower_bound: i64, upper_bound: i64) -> Interval {
    let l = lower_bound.max(0);
    let u = upper_bound - 1;
    if l > u {
        return (0, 0);
    }
    let neg = -((u as f64).sqrt() as i64);
    let pos = (((u + 1) as f64).sqrt()).ceil() as i64;
    (neg, pos)
}

/// Bound on each multiplicand of `i * j` given the output interval.
pub fn mul_bounds(lo: i64, hi: i64) -> Interval {
    sqr_bounds(0, (-(lo + 1)).min(hi))
}

/// Bound shared by both operands of `+` and `-` given the output interval.
/// The reference generator applies this single interval to both operand
/// positions rather than computing one per operand.
pub fn add_sub_bounds(lo: i64, hi: i64) -> Interval {
    (lo / 2 + 1, hi / 2)
}

/// Bound on the SCANL1-folded scalar lambda's input range, specialized per
/// lambda token since each fold shape inverts differently.
pub fn scanl1_bounds(lambda_name: &str, lo: i64, hi: i64, max_len: i64) -> Interval {
    match lambda_name {
        "+" | "-" => (lo / max_len + 1, hi / max_len),
        "*" => {
            let root = 1.0 / max_len as f64;
            let lower = ((lo.max(0) + 1) as f64).powf(root) as i64;
            let upper = (hi.max(0) as f64).powf(root) as i64;
            (lower, upper)
        }
        "MIN" | "MAX" => (lo, hi),
        other => panic!("unsupported SCANL1 lambda `{other}`: no input-bounds rule"),
    }
}

/// Bound on `sum(xs)` given the output interval and the maximum sequence
/// length `max_len` (each element must individually fit the averaged range).
pub fn sum_bounds(lo: i64, hi: i64, max_len: i64) -> Interval {
    (lo / max_len + 1, hi / max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqr_bounds_collapses_when_infeasible() {
        assert_eq!(sqr_bounds(5, 2), (0, 0));
    }

    #[test]
    fn sqr_bounds_brackets_zero() {
        let (lo, hi) = sqr_bounds(0, 10);
        assert!(lo <= 0 && hi >= 0);
    }

    #[test]
    fn add_sub_bounds_halves_the_output_range() {
        assert_eq!(add_sub_bounds(1, 9), (1, 4));
    }

    #[test]
    fn sum_bounds_divides_by_max_len() {
        assert_eq!(sum_bounds(1, 49, 5), (1, 9));
    }
}
