use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use clap::Parser;
use hashbench::{ConfigError, TrialConfig, TrialState, VariantRegistry};

#[derive(Parser, Debug)]
#[command(name = "hashbench", about = "Hash throughput benchmark", version, rename_all = "kebab-case")]
pub struct BenchmarkCmd {
    /// Input sizes in bytes
    #[arg(short = 's', long = "sizes", value_delimiter = ',', default_values_t = [10usize, 1000, 1_000_000])]
    sizes: Vec<usize>,
    /// Hash functions to measure (default: all registered)
    #[arg(short = 'f', long = "functions", value_delimiter = ',')]
    functions: Vec<String>,
    /// Minimum measured wall-clock time per trial, in milliseconds
    #[arg(short = 'm', long = "min-time", default_value = "200")]
    min_time_ms: u64,
    /// List registered hash functions and exit
    #[arg(short = 'l', long = "list", default_value = "false")]
    list: bool,
}

fn main() {
    if let Err(err) = benchmark_hashes() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Runs the (size x function) sweep and prints one line per trial.
fn benchmark_hashes() -> Result<(), ConfigError> {
    let args = BenchmarkCmd::parse();
    let registry = VariantRegistry::with_builtins();

    if args.list {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let names: Vec<String> = if args.functions.is_empty() {
        registry.names().map(str::to_string).collect()
    } else {
        args.functions.clone()
    };

    // resolve everything up front so a bad name fails before any timing
    for name in &names {
        registry.resolve(name)?;
    }

    let floor = Duration::from_millis(args.min_time_ms);
    println!("{:<14} {:>10} {:>14} {:>10}", "function", "size", "ns/op", "MB/s");
    for name in &names {
        for &size in &args.sizes {
            let config = TrialConfig::new(&registry, name, size)?;
            let state = TrialState::setup(&config);
            let (repetitions, elapsed) = calibrate(&state, &config, floor);
            let ns_per_op = elapsed.as_nanos() as f64 / repetitions as f64;
            let mb_per_s = size as f64 / ns_per_op * 1000.0;
            println!("{name:<14} {size:>10} {ns_per_op:>14.1} {mb_per_s:>10.1}");
        }
    }
    Ok(())
}

/// Doubles the repetition count until one measured run lasts at least
/// `floor`, amortizing timer resolution. Returns the final count and its
/// elapsed time.
fn calibrate(
    state: &TrialState,
    config: &TrialConfig<'_>,
    floor: Duration,
) -> (u64, Duration) {
    let mut repetitions = 1u64;
    loop {
        let now = Instant::now();
        let acc = state.run(config.variant(), repetitions);
        let elapsed = now.elapsed();
        black_box(acc);
        if elapsed >= floor {
            return (repetitions, elapsed);
        }
        repetitions *= 2;
    }
}
