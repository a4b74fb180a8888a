//! lift-demo — command-line front end for the lift-sim elevator simulator.
//!
//! With no subcommand it opens the interactive menu: manual input or one of
//! the four canned test cases, all on a single elevator serving floors
//! 0–10 unless configured otherwise.

mod config;
mod console;
mod menu;


use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_core::LiftConfig;
use lift_output::{CsvWriter, OutputObserver};
use lift_scenario::{
    BatchConfig, BatchSummary, Scenario, ScenarioGenerator, ScenarioRng, canned, find_canned,
    load_scenarios_csv, run_batch,
};
use lift_sim::{Elevator, ElevatorBuilder, LiftObserverExt};

use console::{ConsoleObserver, DemoObserver, stop_list};
use menu::Prompter;

/// Single-elevator SCAN dispatch simulator.
#[derive(Parser, Debug)]
#[command(name = "lift-demo", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file, e.g. `{"max_floor": 20}`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Highest served floor (overrides the config file).
    #[arg(long, global = true, allow_hyphen_values = true)]
    max_floor: Option<i32>,

    /// Record events.csv and run_summaries.csv into this directory.
    #[arg(long, global = true)]
    csv_out: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive main menu (the default).
    Menu,

    /// Run canned test cases, or scenarios loaded from CSV.
    Scenario(ScenarioArgs),

    /// One manual-input session.
    Manual,

    /// Generate and run one random scenario.
    Random(RandomArgs),

    /// Run many random scenarios and print a summary.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct ScenarioArgs {
    /// Case number or name, or `all`.
    #[arg(default_value = "all")]
    key: String,

    /// Load scenarios from this CSV file instead of the canned catalog.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Reset the car to the ground floor before each scenario.
    #[arg(long)]
    reset: bool,
}

#[derive(Args, Debug)]
struct RandomArgs {
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 5)]
    passengers: usize,
}

#[derive(Args, Debug)]
struct BatchArgs {
    #[arg(long, default_value_t = 100)]
    runs: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 5)]
    passengers: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref(), cli.max_floor)?;
    let csv_out = cli.csv_out.as_deref();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => with_elevator(config, csv_out, |elevator| {
            menu::main_menu(elevator, &mut Prompter::stdio())
        }),
        Commands::Manual => with_elevator(config, csv_out, |elevator| {
            menu::manual_session(elevator, &mut Prompter::stdio())
        }),
        Commands::Scenario(args) => {
            let scenarios = select_scenarios(&args)?;
            with_elevator(config, csv_out, |elevator| run_scenarios(elevator, &scenarios, args.reset))
        }
        Commands::Random(args) => {
            let generator = ScenarioGenerator::new(config.floor_range()?, args.passengers)?;
            let scenario = generator.generate(format!("random-{}", args.seed), &mut ScenarioRng::new(args.seed));
            for passenger in &scenario.passengers {
                println!("Passenger: {passenger}");
            }
            with_elevator(config, csv_out, |elevator| run_scenarios(elevator, &[scenario], false))
        }
        Commands::Batch(args) => batch(config, &args),
    }
}

/// Build the demo elevator, hand it to `f`, then flush any CSV recording.
fn with_elevator(
    config: LiftConfig,
    csv_out: Option<&Path>,
    f: impl FnOnce(&mut Elevator<DemoObserver>) -> Result<()>,
) -> Result<()> {
    let recorder = csv_out
        .map(|dir| CsvWriter::new(dir).map(OutputObserver::new))
        .transpose()
        .context("opening CSV output")?;
    let mut elevator = ElevatorBuilder::new(config)
        .observer(ConsoleObserver.then(recorder))
        .build()?;

    f(&mut elevator)?;

    if let Some(recorder) = elevator.observer_mut().second.as_mut() {
        recorder.finish().context("writing CSV output")?;
        info!(runs = recorder.runs(), "CSV output written");
    }
    Ok(())
}

fn select_scenarios(args: &ScenarioArgs) -> Result<Vec<Scenario>> {
    let all_keys = args.key.eq_ignore_ascii_case("all");
    match &args.file {
        Some(path) => {
            let scenarios = load_scenarios_csv(path)?;
            if all_keys {
                return Ok(scenarios);
            }
            match scenarios.into_iter().find(|s| s.name == args.key) {
                Some(s) => Ok(vec![s]),
                None => bail!("no scenario named {:?} in {}", args.key, path.display()),
            }
        }
        None if all_keys => Ok(canned()),
        None => match find_canned(&args.key) {
            Some(s) => Ok(vec![s]),
            None => bail!("unknown test case {:?}: expected 1-4 or `all`", args.key),
        },
    }
}

fn run_scenarios(elevator: &mut Elevator<DemoObserver>, scenarios: &[Scenario], reset: bool) -> Result<()> {
    for scenario in scenarios {
        if reset {
            elevator.reset();
        }
        println!("\n=== {} ===", scenario.name);
        if !scenario.description.is_empty() {
            println!("{}", scenario.description);
        }
        let outcome = scenario
            .execute(elevator)
            .with_context(|| format!("scenario {}", scenario.name))?;
        println!(
            "{} completed. Pickups: {}. Drop-offs: {}. Floors travelled: {}.",
            scenario.name,
            stop_list(&outcome.pickup.stops),
            stop_list(&outcome.dropoff.stops),
            outcome.distance(),
        );
    }
    Ok(())
}

fn batch(config: LiftConfig, args: &BatchArgs) -> Result<()> {
    let batch = BatchConfig {
        lift:       config,
        seed:       args.seed,
        runs:       args.runs,
        passengers: args.passengers,
    };
    let runs = run_batch(&batch)?;
    let summary = BatchSummary::from_runs(&runs);

    println!("Runs            : {}", summary.runs);
    println!("Stops           : {}", summary.total_stops);
    println!("Floors travelled: {} (mean {:.2}, max {})", summary.total_distance, summary.mean_distance, summary.max_distance);
    println!("All drained     : {}", if summary.all_drained { "yes" } else { "no" });

    if !summary.all_drained {
        bail!("{} run(s) did not drain", runs.iter().filter(|r| !r.drained).count());
    }
    Ok(())
}
