//! The command line entry point: resolves parameters, runs the
//! simulation, writes reports, and prints the summary metrics.

use std::path::{Path, PathBuf};

use clap::{Args, Command, FromArgMatches as _};

use crate::engine::{simulate, SimulationResult};
use crate::error::OutbreakError;
use crate::log::{info, set_log_level, LevelFilter};
use crate::parameters::{load_parameters, Parameters};
use crate::report;
use crate::summary::Summary;

/// Default cli arguments for the outbreak runner
#[derive(Args, Debug)]
pub struct BaseArgs {
    /// Optional path for a parameters config file
    #[arg(short, long, default_value = "")]
    pub config: String,

    /// Optional path for report output
    #[arg(short, long, default_value = "")]
    pub output_dir: String,

    /// Enable logging at the given level
    #[arg(short, long)]
    pub log_level: Option<LevelFilter>,
}

fn create_cli() -> Command {
    let cli = Command::new("outbreak_sim");
    BaseArgs::augment_args(cli)
}

/// Runs one simulation from command line arguments.
///
/// Parameters come from the `--config` JSON file when given, and from the
/// defaults otherwise. When `--output-dir` is given, the time series and
/// summary reports are written there as CSVs.
///
/// # Errors
///
/// Returns an error if argument parsing, parameter loading, or report
/// writing fails.
pub fn run_with_args() -> Result<SimulationResult, Box<dyn std::error::Error>> {
    let cli = create_cli();
    let matches = cli.get_matches();
    let args = BaseArgs::from_arg_matches(&matches)?;
    Ok(run_with_args_internal(args)?)
}

fn run_with_args_internal(args: BaseArgs) -> Result<SimulationResult, OutbreakError> {
    if let Some(level) = args.log_level {
        set_log_level(level);
    }

    let params = if args.config.is_empty() {
        Parameters::default()
    } else {
        info!("loading parameters from: {}", args.config);
        load_parameters(Path::new(&args.config))?
    };

    let result = simulate(&params);

    if !args.output_dir.is_empty() {
        let output_dir = PathBuf::from(&args.output_dir);
        report::write_time_series(&output_dir.join("time_series.csv"), &result)?;
        report::write_summary(&output_dir.join("summary.csv"), result.summary())?;
    }

    print_summary(result.summary());
    Ok(result)
}

fn print_summary(summary: &Summary) {
    println!("Total population: {:.0}", summary.population);
    println!("Vaccinated at start: {:.0}", summary.vaccinated_count);
    println!("Peak infections: {:.0}", summary.peak_infected);
    println!("Total recoveries: {:.0}", summary.final_recovered);

    match (summary.reproduction_number, summary.trajectory()) {
        (Some(r0), Some(trajectory)) => {
            println!("R0: {r0:.2} (outbreak {trajectory})");
        }
        _ => println!("R0: undefined (recovery rate is zero)"),
    }
    if let Some(advisory) = summary.herd_immunity_advisory() {
        println!("{advisory}");
    }
}
