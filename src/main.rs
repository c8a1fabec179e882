use clap::Parser;
use fuelcheck::core::comparison::{ComparisonResult, InvalidInput};
use fuelcheck::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "fuelcheck", about = "Ethanol vs gasoline price advisor")]
struct Args {
    /// Ethanol price per liter; with --gasoline, prints the verdict and exits
    #[arg(long)]
    ethanol: Option<String>,

    /// Gasoline price per liter; with --ethanol, prints the verdict and exits
    #[arg(long)]
    gasoline: Option<String>,

    /// Currency symbol shown next to prices (overrides config file and env)
    #[arg(long)]
    currency: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to fuelcheck.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("fuelcheck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(&file_config, args.currency.as_deref());
    log::info!("Fuelcheck starting up with config: {:?}", resolved);

    // One-shot mode: same calculate path as the TUI, no terminal takeover.
    match (&args.ethanol, &args.gasoline) {
        (Some(ethanol), Some(gasoline)) => {
            match run_one_shot(ethanol, gasoline, &resolved.currency_symbol) {
                Ok(report) => {
                    println!("{report}");
                    Ok(())
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        (None, None) => fuelcheck::tui::run(&resolved),
        _ => {
            eprintln!("error: --ethanol and --gasoline must be given together");
            std::process::exit(2);
        }
    }
}

/// The whole one-shot mode minus process concerns: validate, calculate,
/// format. Kept free of printing and exit codes so it can be tested.
fn run_one_shot(
    ethanol: &str,
    gasoline: &str,
    currency_symbol: &str,
) -> Result<String, InvalidInput> {
    let result = ComparisonResult::from_input(ethanol, gasoline)?;
    Ok(one_shot_report(&result, currency_symbol))
}

fn one_shot_report(result: &ComparisonResult, currency_symbol: &str) -> String {
    format!(
        "{}\nEthanol:  {} {:.2}\nGasoline: {} {:.2}\nRatio:    {:.4}",
        result.recommendation.message(),
        currency_symbol,
        result.ethanol_price,
        currency_symbol,
        result.gasoline_price,
        result.ratio,
    )
}
