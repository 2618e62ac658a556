//! CLI-level generator defaults and per-task config resolution.

use crate::task::TaskOverrides;
use iogen_dsl::Language;
use iogen_runtime::GenerationConfig;
use std::time::Duration;

/// CLI flag value for `--language`; distinct from [`Language`] because the
/// reference CLI's `simplelist` token doesn't match the catalogue's own
/// `simple` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LanguageArg {
    Simplelist,
    Extended,
    Linq,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Language {
        match arg {
            LanguageArg::Simplelist => Language::Simple,
            LanguageArg::Extended => Language::Extended,
            LanguageArg::Linq => Language::Linq,
        }
    }
}

/// The CLI's resolved defaults, built from parsed flags.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub num_examples: usize,
    pub timeout: Duration,
    pub min_bound: i64,
    pub max_bound: i64,
    pub min_variance: f64,
    pub maxv: i64,
    pub max_io_len: i64,
    /// Not a CLI flag; the reference only exposes this as a per-task kwarg.
    pub min_io_len: usize,
    pub language: Language,
    pub seed: u64,
}

impl GeneratorConfig {
    /// Builds a per-task [`GenerationConfig`], applying the task's own
    /// overrides on top of these CLI-level defaults.
    pub fn for_task(&self, overrides: &TaskOverrides, task_index: usize) -> GenerationConfig {
        GenerationConfig {
            num_examples: overrides.num_examples.unwrap_or(self.num_examples),
            timeout: overrides
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(self.timeout),
            min_bound: Some(overrides.min_bound.unwrap_or(self.min_bound)),
            max_bound: overrides.max_bound.unwrap_or(self.max_bound),
            min_variance: overrides.min_variance.unwrap_or(self.min_variance),
            maxv: overrides.maxv.unwrap_or(self.maxv),
            max_io_len: overrides.max_io_len.unwrap_or(self.max_io_len),
            min_io_len: overrides.min_io_len.unwrap_or(self.min_io_len),
            min_input_range_length: 0,
            // Each task gets a distinct, still-deterministic seed so a
            // fixed --seed reproduces an entire run, not just its first task.
            seed: self.seed.wrapping_add(task_index as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> GeneratorConfig {
        GeneratorConfig {
            num_examples: 10,
            timeout: Duration::from_secs(10),
            min_bound: 0,
            max_bound: 99,
            min_variance: 3.5,
            maxv: 99,
            max_io_len: 10,
            min_io_len: 1,
            language: Language::Simple,
            seed: 42,
        }
    }

    #[test]
    fn task_overrides_win_over_cli_defaults() {
        let cfg = base();
        let overrides = TaskOverrides {
            min_io_len: Some(3),
            ..TaskOverrides::default()
        };
        let resolved = cfg.for_task(&overrides, 0);
        assert_eq!(resolved.min_io_len, 3);
        assert_eq!(resolved.num_examples, 10);
    }

    #[test]
    fn seeds_differ_per_task_index() {
        let cfg = base();
        let a = cfg.for_task(&TaskOverrides::default(), 0);
        let b = cfg.for_task(&TaskOverrides::default(), 1);
        assert_ne!(a.seed, b.seed);
    }
}
