//! The per-task result record emitted by `--json`, or pretty-printed to
//! stdout otherwise.

use iogen_runtime::GenerationResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IoPair {
    pub input: Vec<iogen_core::Value>,
    pub output: iogen_core::Value,
}

#[derive(Debug, Serialize)]
pub struct ResultRecord {
    pub program: String,
    pub io_pairs: Vec<IoPair>,
    pub variance: Option<f64>,
    pub elapsed_secs: f64,
    pub hit_timeout: bool,
    pub total_samples: usize,
}

impl From<GenerationResult> for ResultRecord {
    fn from(result: GenerationResult) -> ResultRecord {
        ResultRecord {
            program: result.program.to_string(),
            io_pairs: result
                .pairs
                .into_iter()
                .map(|p| IoPair {
                    input: p.inputs,
                    output: p.output,
                })
                .collect(),
            variance: result.variance,
            elapsed_secs: result.elapsed.as_secs_f64(),
            hit_timeout: result.hit_timeout,
            total_samples: result.total_samples,
        }
    }
}

pub fn pretty_print(record: &ResultRecord) {
    println!("program: {}", record.program);
    for pair in &record.io_pairs {
        let rendered: Vec<String> = pair.input.iter().map(|v| v.to_string()).collect();
        println!("    ({}) -> {}", rendered.join(", "), pair.output);
    }
    match record.variance {
        Some(v) => println!("output variance: {v}"),
        None => println!("output variance: undefined"),
    }
    if record.hit_timeout {
        println!("WARN: timeout hit while finding interesting samples");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iogen_core::Value;

    #[test]
    fn record_serializes_to_json() {
        let record = ResultRecord {
            program: "a <- [int] | b <- head a".to_string(),
            io_pairs: vec![IoPair {
                input: vec![Value::Seq(vec![1, 2, 3])],
                output: Value::Int(1),
            }],
            variance: Some(2.0),
            elapsed_secs: 0.01,
            hit_timeout: false,
            total_samples: 10,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"hit_timeout\":false"));
    }
}
