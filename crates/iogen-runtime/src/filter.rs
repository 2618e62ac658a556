//! Output-variance scoring and frequency-aware duplicate pruning over an
//! accumulated batch of input/output pairs.

use iogen_core::Value;
use std::collections::HashMap;

/// One sampled input/output pair.
#[derive(Debug, Clone)]
pub struct Pair {
    pub inputs: Vec<Value>,
    pub output: Value,
}

fn population_variance(xs: &[f64]) -> f64 {
    let mean = xs.iter().sum::<f64>() / xs.len() as f64;
    xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / xs.len() as f64
}

/// Scalar variance of the accumulated outputs, or `None` when undefined
/// (no outputs yet, or every sequence output is empty).
pub fn output_variance(pairs: &[Pair]) -> Option<f64> {
    if pairs.is_empty() {
        return None;
    }
    let scalars: Option<Vec<f64>> = match &pairs[0].output {
        Value::Seq(_) => {
            let all_empty = pairs.iter().all(|p| {
                matches!(&p.output, Value::Seq(xs) if xs.is_empty())
            });
            if all_empty {
                None
            } else {
                Some(
                    pairs
                        .iter()
                        .map(|p| match &p.output {
                            Value::Seq(xs) => xs.iter().sum::<i64>() as f64,
                            _ => unreachable!("mixed output types within one task"),
                        })
                        .collect(),
                )
            }
        }
        Value::Int(_) => Some(
            pairs
                .iter()
                .map(|p| p.output.as_int().expect("int output") as f64)
                .collect(),
        ),
        Value::Bool(_) => Some(
            pairs
                .iter()
                .map(|p| if p.output.as_bool().expect("bool output") { 1.0 } else { 0.0 })
                .collect(),
        ),
    };
    scalars.map(|v| population_variance(&v))
}

/// A batch is interesting once its output variance meets `min_variance`.
pub fn is_interesting(pairs: &[Pair], min_variance: f64) -> bool {
    output_variance(pairs).is_some_and(|v| v >= min_variance)
}

/// Prunes over-represented outputs first, keeping at most `num_examples`
/// pairs while preserving the relative order of survivors.
pub fn prune(pairs: Vec<Pair>, num_examples: usize) -> Vec<Pair> {
    if pairs.len() <= num_examples {
        return pairs;
    }

    let mut freq: HashMap<String, usize> = HashMap::new();
    for p in &pairs {
        *freq.entry(p.output.to_string()).or_insert(0) += 1;
    }
    let mean_count = freq.values().sum::<usize>() as f64 / freq.len() as f64;

    let mut removal_order: Vec<usize> = Vec::with_capacity(pairs.len());
    for (i, p) in pairs.iter().enumerate() {
        let key = p.output.to_string();
        if freq[&key] as f64 > mean_count {
            removal_order.insert(0, i);
        } else {
            removal_order.push(i);
        }
    }

    let max_remove = pairs.len().saturating_sub(num_examples);
    let to_remove: std::collections::HashSet<usize> =
        removal_order.into_iter().take(max_remove).collect();

    let mut kept: Vec<Pair> = pairs
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !to_remove.contains(i))
        .map(|(_, p)| p)
        .collect();
    kept.truncate(num_examples);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_pair(output: i64) -> Pair {
        Pair {
            inputs: vec![],
            output: Value::Int(output),
        }
    }

    #[test]
    fn empty_batch_has_no_variance() {
        assert_eq!(output_variance(&[]), None);
    }

    #[test]
    fn all_empty_sequences_have_no_variance() {
        let pairs = vec![
            Pair { inputs: vec![], output: Value::Seq(vec![]) },
            Pair { inputs: vec![], output: Value::Seq(vec![]) },
        ];
        assert_eq!(output_variance(&pairs), None);
    }

    #[test]
    fn constant_outputs_have_zero_variance() {
        let pairs = vec![int_pair(4), int_pair(4), int_pair(4)];
        assert_eq!(output_variance(&pairs), Some(0.0));
        assert!(!is_interesting(&pairs, 0.1));
    }

    #[test]
    fn varied_outputs_are_interesting() {
        let pairs = vec![int_pair(0), int_pair(10), int_pair(20)];
        assert!(is_interesting(&pairs, 1.0));
    }

    #[test]
    fn prune_evicts_the_overrepresented_output_first() {
        let pairs: Vec<Pair> = vec![1, 1, 1, 2, 3].into_iter().map(int_pair).collect();
        let kept = prune(pairs, 3);
        let outs: Vec<i64> = kept.iter().map(|p| p.output.as_int().unwrap()).collect();
        assert_eq!(outs, vec![1, 2, 3]);
    }
}
