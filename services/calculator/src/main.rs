use std::io;

use log::error;

use crate::config::Config;
use crate::error::CalculatorError;

mod config;
mod error;
mod repl;

fn run() -> Result<(), CalculatorError> {
    let config = Config::from_env()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&config, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
