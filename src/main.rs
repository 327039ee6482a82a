use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use land_sim::simulation::{
    format_comparison, format_table, hypergeometric, FrequencyTable, Report, Sampler, SimParams,
    SimulationError, ValidParams, DEFAULT_MAX_HAND_SIZE,
};
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Simulation(#[from] SimulationError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Progress bar template error: {0}")]
    Template(#[from] indicatif::style::TemplateError),
}

#[derive(Parser)]
#[command(name = "land-sim")]
#[command(about = "Monte Carlo estimate of lands in an opening hand", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    params: ParamArgs,
}

#[derive(Args, Clone)]
struct ParamArgs {
    /// Total cards in the deck
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    deck_size: i64,

    /// Land cards in the deck
    #[arg(short, long, default_value_t = 35, allow_negative_numbers = true)]
    lands: i64,

    /// Cards drawn per hand
    #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
    hand_size: i64,

    /// Number of hands to draw
    #[arg(short, long, default_value_t = 100_000, allow_negative_numbers = true)]
    trials: i64,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Largest hand size accepted
    #[arg(long, default_value_t = DEFAULT_MAX_HAND_SIZE)]
    max_hand_size: usize,

    /// Run trial chunks on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl ParamArgs {
    fn sim_params(&self) -> SimParams {
        SimParams {
            deck_size: self.deck_size,
            land_count: self.lands,
            hand_size: self.hand_size,
            trials: self.trials,
            seed: self.seed,
            max_hand_size: self.max_hand_size,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one deck configuration (default)
    Run {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Simulate a range of land counts with a fixed seed
    Sweep {
        /// First land count
        #[arg(long, default_value_t = 32)]
        from: i64,

        /// Last land count (inclusive)
        #[arg(long, default_value_t = 38)]
        to: i64,

        /// Total cards in the deck
        #[arg(long, default_value_t = 100)]
        deck_size: i64,

        /// Cards drawn per hand
        #[arg(long, default_value_t = 7)]
        hand_size: i64,

        /// Number of hands to draw per land count
        #[arg(short, long, default_value_t = 1_000_000)]
        trials: i64,

        /// Seed shared by every land count
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Largest hand size accepted
        #[arg(long, default_value_t = DEFAULT_MAX_HAND_SIZE)]
        max_hand_size: usize,

        /// Run trial chunks on all cores
        #[arg(short, long)]
        parallel: bool,
    },

    /// Compare the simulated distribution with the exact hypergeometric one
    Compare {
        #[command(flatten)]
        params: ParamArgs,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run { params }) => run_simulation(&params),
        Some(Commands::Sweep {
            from,
            to,
            deck_size,
            hand_size,
            trials,
            seed,
            max_hand_size,
            parallel,
        }) => {
            let base = SimParams {
                deck_size,
                land_count: from,
                hand_size,
                trials,
                seed: Some(seed),
                max_hand_size,
            };
            sweep_land_counts(&base, to, parallel)
        }
        Some(Commands::Compare { params }) => compare_with_exact(&params),
        None => run_simulation(&cli.params),
    };

    if let Err(e) = result {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn timed_run(params: ValidParams, parallel: bool) -> FrequencyTable {
    let start = std::time::Instant::now();
    let table = Sampler::new(params).parallel(parallel).run();
    let elapsed = start.elapsed();
    info!(
        "{} hands in {:.2?} ({:.0} hands/sec)",
        table.trials(),
        elapsed,
        table.trials() as f64 / elapsed.as_secs_f64()
    );
    table
}

fn run_simulation(args: &ParamArgs) -> Result<(), CliError> {
    let params = args.sim_params().validate()?;
    let table = timed_run(params, args.parallel);

    if args.json {
        let report = Report::new(&table);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n=== Opening Hand Simulator ===\n");
    println!(
        "Deck: {} cards, {} lands | Hand: {}",
        params.deck().size,
        params.deck().lands,
        params.hand_size()
    );
    println!("Seed: {}\n", table.seed());
    print!("{}", format_table(&table, table.trials(), table.hand_size()));
    Ok(())
}

/// Simulate every land count from `base.land_count` to `to` inclusive
fn sweep_land_counts(base: &SimParams, to: i64, parallel: bool) -> Result<(), CliError> {
    // Validate every configuration up front so a bad range prints nothing
    let configs = (base.land_count..=to)
        .map(|land_count| {
            SimParams {
                land_count,
                ..base.clone()
            }
            .validate()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let bar = ProgressBar::new(configs.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {bar:30} {pos}/{len} land counts",
    )?);

    for params in configs {
        let table = timed_run(params, parallel);
        bar.suspend(|| {
            println!("\nDeck with {} lands:", table.deck().lands);
            print!("{}", format_table(&table, table.trials(), table.hand_size()));
        });
        bar.inc(1);
    }
    bar.finish_and_clear();
    Ok(())
}

fn compare_with_exact(args: &ParamArgs) -> Result<(), CliError> {
    let params = args.sim_params().validate()?;
    let table = timed_run(params, args.parallel);
    let exact = hypergeometric(params.deck(), params.hand_size());

    println!("\n=== Simulated vs Exact ===\n");
    println!(
        "Deck: {} cards, {} lands | Hand: {} | Trials: {} | Seed: {}\n",
        params.deck().size,
        params.deck().lands,
        params.hand_size(),
        table.trials(),
        table.seed()
    );
    print!("{}", format_comparison(&table, &exact));

    let worst = table
        .iter()
        .map(|(lands, count)| {
            (count as f64 / table.trials() as f64 - exact[lands]).abs() * 100.0
        })
        .fold(0.0, f64::max);
    println!("\nLargest deviation: {:.3} percentage points", worst);
    Ok(())
}
