mod config;
mod result;
mod task;

use clap::{Args, Parser};
use config::{GeneratorConfig, LanguageArg};
use indicatif::{ProgressBar, ProgressStyle};
use iogen_dsl::DslRegistry;
use result::{pretty_print, ResultRecord};
use std::io::{BufRead, Read};
use std::path::PathBuf;
use std::time::Duration;
use task::TaskDescriptor;

/// Generates biased, interesting input/output examples from small DSL
/// programs, for training program-synthesis models on concrete I/O pairs.
#[derive(Parser)]
#[command(name = "iogen", version, about)]
struct Cli {
    /// Number of IO pairs to keep per task.
    #[arg(short = 'n', long = "num-examples", default_value_t = 10)]
    num_examples: usize,

    /// Per-task wall-clock budget, in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Lower bound on sampled integers (also the propagation floor).
    #[arg(long = "min-bound", default_value_t = 0)]
    min_bound: i64,

    /// Upper bound on sampled integers; also the `Null` sentinel value.
    #[arg(long = "max-bound", default_value_t = 99)]
    max_bound: i64,

    /// Minimum output variance for a batch to count as interesting.
    #[arg(long = "min-variance", default_value_t = 3.5)]
    min_variance: f64,

    /// Max value for a list item; also `L`, the bounds-rule parameter
    /// threaded into constraint propagation.
    #[arg(long = "maxv", default_value_t = 99)]
    maxv: i64,

    /// Maximum length of a sampled `[int]` input.
    #[arg(long = "max-io-len", default_value_t = 10)]
    max_io_len: i64,

    /// Which DSL catalogue to compile programs against.
    #[arg(long, value_enum, default_value_t = LanguageArg::Simplelist)]
    language: LanguageArg,

    /// Seed for the deterministic RNG; the same seed reproduces a run.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Emit a single JSON document to --to-json instead of printing.
    #[arg(long)]
    json: bool,

    /// Destination path when --json is set.
    #[arg(long = "to-json", default_value = "io.json")]
    to_json: PathBuf,

    #[command(flatten)]
    input: InputSource,
}

#[derive(Args)]
#[group(required = false, multiple = false)]
struct InputSource {
    /// Read one task source per line from stdin.
    #[arg(long)]
    stdin: bool,

    /// Read tasks from one or more JSON files (array of `{"source": ...}`).
    #[arg(long = "from-json", num_args = 0..)]
    from_json: Option<Vec<PathBuf>>,

    /// Read tasks, one source per line, from one or more text files.
    #[arg(long = "from-txt", num_args = 0..)]
    from_txt: Option<Vec<PathBuf>>,
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("iogen_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = get_tasks(&cli.input)?;
    let config = GeneratorConfig {
        num_examples: cli.num_examples,
        timeout: Duration::from_secs(cli.timeout),
        min_bound: cli.min_bound,
        max_bound: cli.max_bound,
        min_variance: cli.min_variance,
        maxv: cli.maxv,
        max_io_len: cli.max_io_len,
        // Not a CLI flag; the reference only exposes this as a per-task kwarg.
        min_io_len: 1,
        language: cli.language.into(),
        seed: cli.seed,
    };

    let progress = ProgressBar::new(tasks.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.set_message("Total Progress");

    let mut records = Vec::with_capacity(tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        let task_config = config.for_task(&task.kwargs, index);
        let registry = DslRegistry::build(config.language, task_config.max_bound);
        match iogen_runtime::generate_interesting(&registry, &task.source, &task_config) {
            Ok(result) => records.push(ResultRecord::from(result)),
            Err(err) => tracing::warn!(source = %task.source, %err, "task failed to compile or execute"),
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if cli.json {
        let file = std::fs::File::create(&cli.to_json)?;
        serde_json::to_writer(file, &records)?;
        println!("{}", cli.to_json.display());
    } else {
        for record in &records {
            pretty_print(record);
        }
    }
    Ok(())
}

fn get_tasks(input: &InputSource) -> Result<Vec<TaskDescriptor>, Box<dyn std::error::Error>> {
    if input.stdin {
        return read_lines(std::io::stdin().lock()).map(|lines| {
            lines.into_iter().map(TaskDescriptor::new).collect()
        });
    }
    if let Some(paths) = &input.from_json {
        let mut tasks = Vec::new();
        for path in paths {
            let text = std::fs::read_to_string(path)?;
            let parsed: Vec<TaskDescriptor> = serde_json::from_str(&text)?;
            tasks.extend(parsed.into_iter().filter(|t| !t.skip));
        }
        return Ok(tasks);
    }
    if let Some(paths) = &input.from_txt {
        let mut tasks = Vec::new();
        for path in paths {
            let file = std::fs::File::open(path)?;
            tasks.extend(read_lines(file)?.into_iter().map(TaskDescriptor::new));
        }
        return Ok(tasks);
    }
    println!("Demo mode:");
    Ok(task::stock_tasks())
}

fn read_lines<R: Read>(reader: R) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let buffered = std::io::BufReader::new(reader);
    let mut lines = Vec::new();
    for line in buffered.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}
