//! Confirms sampled or produced values obey their declared type signature.

use crate::error::VerifyFault;
use iogen_core::{Type, Value};

/// The legal integer and sequence-length ranges used to verify a value.
#[derive(Debug, Clone, Copy)]
pub struct RangeConfig {
    pub min_int: i64,
    pub max_int: i64,
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for RangeConfig {
    fn default() -> Self {
        RangeConfig {
            min_int: -512,
            max_int: 512,
            min_len: 0,
            max_len: 10,
        }
    }
}

impl RangeConfig {
    pub fn new(min_int: i64, max_int: i64, min_len: usize, max_len: usize) -> RangeConfig {
        RangeConfig {
            min_int,
            max_int,
            min_len,
            max_len,
        }
    }
}

pub fn verify_value(ty: Type, value: &Value, cfg: &RangeConfig) -> Result<(), VerifyFault> {
    match (ty, value) {
        (Type::TInt, Value::Int(n)) if (cfg.min_int..=cfg.max_int).contains(n) => Ok(()),
        (Type::TSeq, Value::Seq(xs))
            if (cfg.min_len..=cfg.max_len).contains(&xs.len())
                && xs.iter().all(|x| (cfg.min_int..=cfg.max_int).contains(x)) =>
        {
            Ok(())
        }
        (Type::TBool, Value::Bool(_)) => Ok(()),
        _ => Err(VerifyFault {
            expected: ty.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Verifies a full input tuple against its declared signature, positionally.
pub fn verify_inputs(types: &[Type], values: &[Value], cfg: &RangeConfig) -> Result<(), VerifyFault> {
    if types.len() != values.len() {
        return Err(VerifyFault {
            expected: format!("{} input(s)", types.len()),
            value: format!("{} value(s)", values.len()),
        });
    }
    types
        .iter()
        .zip(values)
        .try_for_each(|(ty, v)| verify_value(*ty, v, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_values() {
        let cfg = RangeConfig::default();
        assert!(verify_value(Type::TInt, &Value::Int(10), &cfg).is_ok());
        assert!(verify_value(Type::TSeq, &Value::Seq(vec![1, 2, 3]), &cfg).is_ok());
    }

    #[test]
    fn rejects_out_of_range_int() {
        let cfg = RangeConfig::default();
        assert!(verify_value(Type::TInt, &Value::Int(9999), &cfg).is_err());
    }

    #[test]
    fn rejects_sequence_too_long() {
        let cfg = RangeConfig { max_len: 3, ..RangeConfig::default() };
        assert!(verify_value(Type::TSeq, &Value::Seq(vec![1, 2, 3, 4]), &cfg).is_err());
    }

    #[test]
    fn rejects_mismatched_arity() {
        let cfg = RangeConfig::default();
        let err = verify_inputs(
            &[Type::TInt, Type::TSeq],
            &[Value::Int(1)],
            &cfg,
        )
        .unwrap_err();
        assert!(err.expected.contains("2 input"));
    }
}
