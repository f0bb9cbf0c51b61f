use clap::Parser;
use ode_steps::{Config, Method, run_config};
use std::error::Error;
use std::path::PathBuf;
use tracing::Level;

/// Integrates dy/dx = f(x,y) with fixed-step Euler, Modified Euler and Runge-Kutta methods
///
/// Writes one `<method>.txt` file per method with the (x, y) samples of the run.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// YAML configuration file (defaults reproduce dy/dx = y - x over [0, 100])
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Step size, overriding the configuration
    #[arg(long)]
    dx: Option<f64>,

    /// Output directory, overriding the configuration
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Method to run (repeat to select several; overrides the configuration)
    #[arg(short, long, value_enum)]
    method: Vec<Method>,

    /// Print debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dx) = args.dx {
        config.dx = dx;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    if !args.method.is_empty() {
        config.methods = args.method;
    }

    run_config(&config)?;
    Ok(())
}
