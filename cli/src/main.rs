//! kit-sim - command-line front end for the kit allocation simulator
//!
//! Every command prints JSON on stdout. Logs go to stderr and are
//! controlled with `RUST_LOG`.

mod commands;

use clap::{Parser, Subcommand};
use commands::{CliError, Outcome, ParamOverrides};
use kit_simulator_core_rs::models::{CabinClass, FlightStatus};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kit-sim")]
#[command(about = "Explore rotable-kit allocation scenarios and simulate policy changes")]
struct Cli {
    /// Load the reference dataset from a JSON file instead of the built-in catalog
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the scenario catalog
    Scenarios,

    /// Show the dashboard payload of a scenario (unknown ids show the baseline)
    Dashboard {
        scenario: String,
    },

    /// Show the strategy summary of a scenario
    Strategy {
        scenario: String,
    },

    /// Print the default policy parameter set
    Params,

    /// Validate a policy parameter set without simulating it
    Validate {
        #[command(flatten)]
        overrides: ParamOverrides,
    },

    /// Simulate a policy parameter set against the reference figures
    Simulate {
        #[command(flatten)]
        overrides: ParamOverrides,
    },

    /// List flights, optionally filtered
    Flights {
        /// Only flights departing from or arriving at this airport
        #[arg(long)]
        airport: Option<String>,

        /// Only flights carrying this cabin class (F, J, W, Y)
        #[arg(long)]
        cabin: Option<CabinClass>,

        /// Minimum distance (km, inclusive)
        #[arg(long)]
        min_distance: Option<u32>,

        /// Maximum distance (km, inclusive)
        #[arg(long)]
        max_distance: Option<u32>,

        /// Only flights with this outcome (ok, warning, critical)
        #[arg(long)]
        outcome: Option<FlightStatus>,
    },

    /// List airports with per-class stock health
    Airports,

    /// Show one airport
    Airport {
        code: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,kit_simulator_core_rs=info,kit_sim=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(Outcome::Success(json)) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Rejected(json)) => {
            println!("{}", json);
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Outcome, CliError> {
    let service = commands::load_service(cli.dataset.as_deref())?;
    let out = commands::Printer { pretty: cli.pretty };

    match cli.command {
        Command::Scenarios => out.success(&service.list_scenarios()),
        Command::Dashboard { scenario } => out.success(&service.get_dashboard(&scenario)),
        Command::Strategy { scenario } => out.success(&service.get_strategy_summary(&scenario)),
        Command::Params => out.success(&service.default_params()),
        Command::Validate { overrides } => commands::validate(&service, &overrides, &out),
        Command::Simulate { overrides } => commands::simulate(&service, &overrides, &out),
        Command::Flights {
            airport,
            cabin,
            min_distance,
            max_distance,
            outcome,
        } => {
            let filter =
                commands::flight_filter(airport, cabin, min_distance, max_distance, outcome)?;
            out.success(&service.list_flights(&filter))
        }
        Command::Airports => out.success(&commands::airport_reports(&service.list_airports())),
        Command::Airport { code } => {
            let airport = service.get_airport(&code)?;
            out.success(&commands::AirportReport::from(&airport))
        }
    }
}
