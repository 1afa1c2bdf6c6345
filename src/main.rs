mod app;
mod terminal;

use app::{MAX_SPEED, MIN_SPEED};
use clap::Parser;
use lifeterm::SimConfig;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lifeterm")]
#[command(version)]
#[command(about = "Conway's Game of Life on a torus, in the terminal", long_about = None)]
struct Cli {
    /// World width in cells
    #[arg(short = 'W', long, default_value = "100", value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// World height in cells
    #[arg(short = 'H', long, default_value = "100", value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Probability that a cell starts alive (0.0 to 1.0)
    #[arg(short, long, default_value = "0.5", value_parser = parse_probability)]
    prob: f64,

    /// Initial speed factor (generations per second)
    #[arg(short, long, default_value = "1.0", value_parser = parse_speed)]
    speed: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Use the fast engine: higher throughput, no fate/age detail in the display
    #[arg(short, long)]
    fast: bool,

    /// Disable age-based cell colors
    #[arg(long)]
    no_color: bool,
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let prob: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&prob) {
        Ok(prob)
    } else {
        Err(format!("must be within [0.0, 1.0], got {prob}"))
    }
}

fn parse_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (MIN_SPEED..=MAX_SPEED).contains(&speed) {
        Ok(speed)
    } else {
        Err(format!(
            "must be within [{MIN_SPEED}, {MAX_SPEED}], got {speed}"
        ))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = SimConfig {
        width: cli.width as usize,
        height: cli.height as usize,
        prob: cli.prob,
        speed: cli.speed,
        seed: cli.seed,
        fast: cli.fast,
        color: !cli.no_color,
    };

    if let Err(err) = app::run(&config) {
        eprintln!("lifeterm: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
