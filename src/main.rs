use nbsim::{load_scenario, Scenario, ScenarioConfig, ExecutorKind};
use nbsim::{CsvSink, LogSink, StateSink};
use nbsim::bench_step_curve;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Direct-sum N-body gravity on a worker pool")]
struct Args {
    /// Scenario file, looked up as given and then under scenarios/
    #[arg(short, long = "file", default_value = "planets.yaml")]
    file_name: String,

    /// Number of steps; runs until interrupted when omitted
    #[arg(short, long)]
    steps: Option<u64>,

    /// Override the worker count
    #[arg(short, long)]
    workers: Option<usize>,

    /// Step on the calling thread instead of the worker pool
    #[arg(long, conflicts_with = "workers")]
    serial: bool,

    /// Write every step's positions to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log positions every this many steps (when not writing CSV)
    #[arg(long, default_value_t = 100)]
    every: u64,

    /// Run the serial-vs-pool step benchmark instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_config(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    load_scenario(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

// info unless RUST_LOG says otherwise
fn logger_builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or("info"))
}

fn run<S: StateSink>(scenario: Scenario, steps: Option<u64>, sink: &mut S) -> Result<()> {
    let mut sim = scenario.into_simulation()?;

    match steps {
        Some(steps) => sim.run(steps, sink)?,
        // the driver never stops on its own
        None => loop {
            sim.run(1, sink)?;
        },
    }

    let state = sim.state();
    println!("finished {} steps at t = {:.4}", sim.steps_taken(), state.t);
    Ok(())
}

fn main() -> Result<()> {
    logger_builder().init();
    let args = Args::parse();

    if args.bench {
        bench_step_curve(&[100, 200, 400, 800, 1600, 3200], 5)?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_config(&args.file_name)?;
    let mut scenario = Scenario::build(scenario_cfg)?;

    if args.serial {
        scenario.executor = ExecutorKind::Serial;
    } else if let Some(workers) = args.workers {
        scenario.executor = ExecutorKind::Pool { workers };
    }

    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            run(scenario, args.steps, &mut CsvSink::new(BufWriter::new(file)))
        }
        None => run(scenario, args.steps, &mut LogSink { every: args.every }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_defaults_to_info_without_rust_log() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let logger = logger_builder().build();
        assert_eq!(logger.filter(), log::LevelFilter::Info);
    }

    #[test]
    fn workers_flag_conflicts_with_serial() {
        assert!(Args::try_parse_from(["nbsim", "--serial", "-w", "2"]).is_err());
        let args = Args::try_parse_from(["nbsim", "-w", "2", "-s", "10"]).unwrap();
        assert_eq!((args.workers, args.steps), (Some(2), Some(10)));
    }
}
