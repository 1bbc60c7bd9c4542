// main.rs - Terminal Game of Life on a square toroidal board
// Usage: life <board dimension>

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use simple_logger::SimpleLogger;

mod cli;
mod config;
mod display;
mod driver;
mod input;

use config::Config;
use display::{TerminalGuard, TerminalSurface};
use input::KeyboardInput;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let config = match cli::parse_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match play(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn play(config: &Config) -> Result<()> {
    SimpleLogger::new()
        .with_level(config.log_level)
        .init()
        .context("failed to initialize logger")?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
    let mut rng = config.rng();

    let summary = {
        let _terminal = TerminalGuard::enter()?;
        let mut surface = TerminalSurface::new(io::stdout(), config.live_color, config.quit_key);
        let mut input = KeyboardInput::new(config.quit_key);
        runtime.block_on(driver::run(config, &mut surface, &mut input, &mut rng))
    }?;

    log::info!(
        "quit after {} generations with {} live cells",
        summary.generations,
        summary.final_population
    );
    Ok(())
}
