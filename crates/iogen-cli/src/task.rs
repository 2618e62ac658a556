//! Task descriptors: one DSL source string plus optional per-task overrides
//! of the generator config, as read from JSON, text, or stdin.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskOverrides {
    pub num_examples: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub min_bound: Option<i64>,
    pub max_bound: Option<i64>,
    pub min_variance: Option<f64>,
    pub maxv: Option<i64>,
    pub max_io_len: Option<i64>,
    pub min_io_len: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub source: String,
    #[serde(default)]
    pub kwargs: TaskOverrides,
    #[serde(default)]
    pub skip: bool,
}

impl TaskDescriptor {
    pub fn new(source: impl Into<String>) -> TaskDescriptor {
        TaskDescriptor {
            source: source.into(),
            kwargs: TaskOverrides::default(),
            skip: false,
        }
    }
}

/// The stock demo tasks shown when no input source is given, mirroring the
/// reference generator's built-in sanity-check programs.
pub fn stock_tasks() -> Vec<TaskDescriptor> {
    [
        "a <- [int] | b <- head a",
        "a <- [int] | b <- tail a",
        "a <- [int] | b <- tail a | c <- head a | d <- count c b",
        "a <- [int] | b <- tail a | c <- len a | d <- count c b",
        "a <- [int] | b <- tail a | c <- last a | d <- count c b",
        "a <- [int] | b <- tail a | c <- len b | d <- count c b",
        "a <- [int] | b <- tail a | c <- head b | d <- count c b",
        "a <- [int] | b <- tail a | c <- last b | d <- count c b",
        "a <- int | b <- [int] | c <- count a b",
    ]
    .into_iter()
    .map(TaskDescriptor::new)
    .chain(std::iter::once(TaskDescriptor {
        source: "a <- [int] | b <- tail a | c <- tail b | d <- tail c | e <- head d | f <- count e a"
            .to_string(),
        kwargs: TaskOverrides {
            min_io_len: Some(3),
            ..TaskOverrides::default()
        },
        skip: false,
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_tasks_is_nonempty_and_well_formed() {
        let tasks = stock_tasks();
        assert_eq!(tasks.len(), 10);
        assert!(tasks.iter().all(|t| t.source.contains("<-")));
    }

    #[test]
    fn task_round_trips_through_json() {
        let task = TaskDescriptor::new("a <- [int] | b <- head a");
        let json = serde_json::to_string(&task).unwrap();
        let back: TaskDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.source, task.source);
    }
}
