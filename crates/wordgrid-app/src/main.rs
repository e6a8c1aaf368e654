//! Main application entry point.

use clap::Parser;
use std::process::ExitCode;
use wordgrid_app::{App, Cli};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting wordgrid");

    let cli = Cli::parse();
    let result = App::new(&cli).and_then(|mut app| app.run(&cli.drags, &mut std::io::stdout().lock()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("wordgrid: {e}");
            ExitCode::FAILURE
        }
    }
}
