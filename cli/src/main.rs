use std::process::ExitCode;

use clap::Parser;
use polycalc_cli::parsers::Operation;
use polycalc_cli::report::{describe_error, run};
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The operation to apply.
    #[arg(ignore_case = true, value_enum)]
    operation: Operation,

    /// Coefficients of the first polynomial, lowest power first, e.g. "-5 2 3"
    /// for 3x² + 2x - 5.
    #[arg(allow_hyphen_values = true)]
    p1: String,

    /// Coefficients of the second polynomial, lowest power first.
    #[arg(allow_hyphen_values = true)]
    p2: String,
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();

    match run(args.operation, &args.p1, &args.p2) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", describe_error(&err));
            ExitCode::FAILURE
        }
    }
}
