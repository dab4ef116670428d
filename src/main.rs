// List Modification Benchmarks - standalone runner
//
// Run: cargo run --release --bin list-bench -- [OPTIONS]
//
// Results go to stdout, progress logging to stderr (RUST_LOG=debug for
// per-iteration scores).

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use list_modification_benchmarks::options::{
    DEFAULT_FORKS, DEFAULT_MEASUREMENT_ITERATIONS, DEFAULT_WARMUP_ITERATIONS,
};
use list_modification_benchmarks::{
    BenchResult, Grid, ListImpl, RunnerOptions, Runner, Suite, DEFAULT_SIZES,
};

#[derive(Parser, Debug)]
#[command(name = "list-bench", about = "Measure list modification throughput")]
struct Cli {
    /// Only run benchmarks whose `Suite.operation` label contains this
    #[arg(short, long)]
    include: Option<String>,

    /// Restrict to one suite: `unsafe` or `safe`
    #[arg(long)]
    suite: Option<String>,

    /// List implementations to run (default: all in the suite)
    #[arg(long = "impl", num_args = 1..)]
    implementations: Vec<String>,

    /// Sizes to run
    #[arg(long = "size", num_args = 1.., default_values_t = DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Warmup iterations per fork
    #[arg(long = "wi", default_value_t = DEFAULT_WARMUP_ITERATIONS)]
    warmup_iterations: usize,

    /// Measurement iterations per fork
    #[arg(long = "mi", default_value_t = DEFAULT_MEASUREMENT_ITERATIONS)]
    measurement_iterations: usize,

    /// Isolated executions per combination
    #[arg(short, long, default_value_t = DEFAULT_FORKS)]
    forks: usize,

    /// Length of one iteration in milliseconds
    #[arg(long = "time-ms", default_value_t = 1000)]
    time_ms: u64,

    /// Abort the whole run on the first failing benchmark
    #[arg(long)]
    fail_on_error: bool,

    /// Print the combinations that would run and exit
    #[arg(long)]
    list: bool,
}

fn build_options(cli: &Cli) -> BenchResult<RunnerOptions> {
    let mut grid = match &cli.suite {
        Some(name) => Grid::for_suite(name.parse::<Suite>()?),
        None => Grid::all(),
    };

    if !cli.implementations.is_empty() {
        let implementations = cli
            .implementations
            .iter()
            .map(|name| name.parse::<ListImpl>())
            .collect::<BenchResult<Vec<_>>>()?;
        grid = grid.with_implementations(implementations);
    }
    grid = grid.with_sizes(cli.sizes.clone());

    let mut builder = RunnerOptions::builder()
        .grid(grid)
        .warmup_iterations(cli.warmup_iterations)
        .measurement_iterations(cli.measurement_iterations)
        .forks(cli.forks)
        .iteration_time(Duration::from_millis(cli.time_ms))
        .fail_on_error(cli.fail_on_error);
    if let Some(pattern) = &cli.include {
        builder = builder.include(pattern.clone());
    }
    builder.build()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = match build_options(&cli) {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let runner = Runner::new(options);

    if cli.list {
        for combination in runner.selected() {
            println!("{}", combination);
        }
        return ExitCode::SUCCESS;
    }

    match runner.run() {
        Ok(report) => {
            println!();
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
