//! # BAT Terminal Application
//!
//! Entry point: initialize logging, load the data files, run the screen
//! loop over stdin/stdout, save on quit.

use std::io;

use tracing::error;
use tracing_subscriber::EnvFilter;

use bat_store::{Library, StoreConfig};

use crate::input::Prompt;
use crate::screens::BatUi;

mod error;
mod input;
mod screens;

fn main() {
    init_tracing();

    let config = StoreConfig::from_env();
    let library = match Library::load(&config) {
        Ok(library) => library,
        Err(err) => {
            error!("Could not load library data: {err}");
            eprintln!("Could not load library data: {err}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompt = Prompt::new(stdin.lock(), stdout.lock());

    let mut ui = BatUi::new(library, prompt);
    if let Err(err) = ui.run(&config) {
        error!("Session ended abnormally: {err}");
        eprintln!("Session ended abnormally: {err}");
        std::process::exit(1);
    }
}

/// Logging to stderr, filtered by `RUST_LOG` (default `info`).
///
/// Stdout belongs to the prompt; logs must not interleave with it.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
