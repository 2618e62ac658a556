//! The generation driver: compiles a program, repeatedly samples and
//! evaluates batches, prunes, and stops on interestingness or timeout.

use crate::executor;
use crate::filter::{self, Pair};
use crate::sampler::BiasedSampler;
use crate::verify::{verify_inputs, verify_value, RangeConfig};
use iogen_compiler::{compile_program, CompileError, Program};
use iogen_core::{Type, Value};
use iogen_dsl::DslRegistry;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub enum DriverError {
    Compile(CompileError),
    Eval(crate::error::EvalFault),
    Verify(crate::error::VerifyFault),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Compile(e) => write!(f, "{e}"),
            DriverError::Eval(e) => write!(f, "{e}"),
            DriverError::Verify(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<CompileError> for DriverError {
    fn from(e: CompileError) -> Self {
        DriverError::Compile(e)
    }
}

impl From<crate::error::EvalFault> for DriverError {
    fn from(e: crate::error::EvalFault) -> Self {
        DriverError::Eval(e)
    }
}

impl From<crate::error::VerifyFault> for DriverError {
    fn from(e: crate::error::VerifyFault) -> Self {
        DriverError::Verify(e)
    }
}

/// Everything the driver needs beyond the DSL registry and source text.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub num_examples: usize,
    pub timeout: Duration,
    pub min_bound: Option<i64>,
    pub max_bound: i64,
    pub min_variance: f64,
    /// `L`: the bounds-rule parameter threaded into `compile_program`.
    /// Distinct from `max_io_len`, which only caps sampled sequence length.
    pub maxv: i64,
    pub max_io_len: i64,
    pub min_io_len: usize,
    pub min_input_range_length: i64,
    pub seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            num_examples: 10,
            timeout: Duration::from_secs(10),
            min_bound: Some(0),
            max_bound: 99,
            min_variance: 3.5,
            maxv: 10,
            max_io_len: 10,
            min_io_len: 1,
            min_input_range_length: 0,
            seed: 0,
        }
    }
}

/// The outcome of one task: the compiled program, the surviving pairs, and
/// the bookkeeping the CLI reports per task.
#[derive(Debug)]
pub struct GenerationResult {
    pub program: Program,
    pub pairs: Vec<Pair>,
    pub variance: Option<f64>,
    pub elapsed: Duration,
    pub hit_timeout: bool,
    pub total_samples: usize,
}

/// Compiles `source` against `registry` and samples until the accumulated
/// batch is interesting or `config.timeout` elapses.
pub fn generate_interesting(
    registry: &DslRegistry,
    source: &str,
    config: &GenerationConfig,
) -> Result<GenerationResult, DriverError> {
    let normalized = source.replace(" | ", "\n");
    let program = compile_program(
        registry,
        &normalized,
        config.max_bound,
        Some(config.maxv),
        config.min_input_range_length,
        config.min_bound,
    )?;

    let mut rng = BiasedSampler::new(Pcg64::seed_from_u64(config.seed));
    let input_types = program.input_types();
    let output_type = program.output_type();
    let started = Instant::now();
    let mut pairs: Vec<Pair> = Vec::new();
    let mut total_samples = 0usize;
    let mut interesting = false;
    let mut hit_timeout = false;

    tracing::info!(source = %program, "starting generation");

    let input_range = RangeConfig::new(
        config.min_bound.unwrap_or(-config.max_bound),
        config.max_bound,
        config.min_io_len,
        config.max_io_len as usize,
    );
    // Computed outputs (e.g. `tail` of a length-1 input) may legitimately be
    // shorter than `min_io_len`; only the sampled inputs are held to that
    // floor, matching the reference's own output check (value range only).
    let output_range = RangeConfig::new(
        input_range.min_int,
        input_range.max_int,
        0,
        config.max_io_len as usize,
    );

    loop {
        let mut batch = Vec::with_capacity(config.num_examples);
        for _ in 0..config.num_examples {
            let inputs = draw_inputs(&mut rng, &program, &input_types, config);
            let output = executor::run(&program, &inputs)?;
            if let Err(fault) = verify_inputs(&input_types, &inputs, &input_range)
                .and_then(|()| verify_value(output_type, &output, &output_range))
            {
                tracing::warn!(source = %program, %fault, "sampled pair failed verification");
                return Err(fault.into());
            }
            batch.push(Pair { inputs, output });
        }
        total_samples += batch.len();
        pairs.extend(batch);
        pairs = filter::prune(pairs, config.num_examples);

        if filter::is_interesting(&pairs, config.min_variance) {
            interesting = true;
        }
        if started.elapsed() >= config.timeout {
            hit_timeout = !interesting;
            tracing::warn!(source = %program, total_samples, "timed out before an interesting batch was found");
            break;
        }
        if interesting {
            break;
        }
    }

    tracing::info!(source = %program, total_samples, pairs = pairs.len(), "finished generation");

    let variance = filter::output_variance(&pairs);
    Ok(GenerationResult {
        program,
        pairs,
        variance,
        elapsed: started.elapsed(),
        hit_timeout,
        total_samples,
    })
}

fn draw_inputs<R: rand::Rng>(
    sampler: &mut BiasedSampler<R>,
    program: &Program,
    input_types: &[Type],
    config: &GenerationConfig,
) -> Vec<Value> {
    input_types
        .iter()
        .zip(program.bounds.iter())
        .map(|(ty, &(lo, hi))| match ty {
            Type::TInt => Value::Int(sampler.draw_int(lo, hi)),
            Type::TSeq => {
                let len = sampler.draw_len(config.min_io_len, config.max_io_len as usize);
                Value::Seq(sampler.draw_seq(lo, hi, len))
            }
            Type::TBool => unreachable!("no catalogue exposes a TBool input register"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iogen_dsl::Language;

    #[test]
    fn head_task_terminates_and_produces_pairs() {
        let registry = DslRegistry::build(Language::Simple, 10);
        let config = GenerationConfig {
            num_examples: 5,
            timeout: Duration::from_secs(2),
            min_variance: 0.0,
            ..GenerationConfig::default()
        };
        let result =
            generate_interesting(&registry, "a <- [int] | b <- head a", &config).unwrap();
        assert!(!result.pairs.is_empty());
        assert!(result.total_samples >= result.pairs.len());
    }

    #[test]
    fn unknown_operation_aborts_with_compile_error() {
        let registry = DslRegistry::build(Language::Simple, 10);
        let config = GenerationConfig::default();
        let err = generate_interesting(&registry, "a <- [int] | b <- bogus a", &config)
            .unwrap_err();
        assert!(matches!(err, DriverError::Compile(_)));
    }
}
