//! Command line entry point: reads a load file and prints one schedule per driver.

use clap::Parser;
use log::info;
use mst_vrp::config::{Config, ScheduleRetention};
use mst_vrp::load::LoadTable;
use mst_vrp::utils::{save_schedules, write_schedules, OutputFormat, RunStatistics};
use mst_vrp::Dispatcher;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Input file with one `<load_id> (x,y) (x,y)` record per line
    input: PathBuf,

    /// Which spanning forest components become driver schedules
    #[arg(long, value_enum, default_value_t = ScheduleRetention::AllComponents)]
    retention: ScheduleRetention,

    /// Leave edges heavier than this out of the spanning forest
    #[arg(long)]
    max_edge_weight: Option<f64>,

    /// Schedule output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Also write the schedules to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fixed cost per driver in the cost report
    #[arg(long, default_value_t = 500.0)]
    driver_cost: f64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version come through here too
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let loads = LoadTable::from_file(&args.input)?;
    info!("Loaded {} loads from {}", loads.len(), args.input.display());

    let mut config = Config::new()
        .with_retention(args.retention)
        .with_driver_cost(args.driver_cost);
    if let Some(weight) = args.max_edge_weight {
        config = config.with_max_edge_weight(weight);
    }

    let mut dispatcher = Dispatcher::new(loads, config);
    let solution = dispatcher.run().clone();

    write_schedules(&solution, args.format, io::stdout().lock())?;

    if let Some(path) = &args.output {
        save_schedules(&solution, args.format, path)?;
        info!("Saved schedules to {}", path.display());
    }

    info!(
        "{}",
        RunStatistics::new(dispatcher.loads.len(), &solution, dispatcher.run_time).format()
    );

    Ok(())
}
