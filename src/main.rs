//! Contact Book - main entry point.

use anyhow::Result;
use contact_book::session::run_session;
use contact_book::{Config, ContactRepository, Dispatcher, FileContactRepository};
use contact_book::{SharedInput, TerminalResolver};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr so replies on stdout stay readable
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository = FileContactRepository::new(&config.contacts_file, config.page_size);
    let book = repository.load()?;

    let input = SharedInput::stdin();
    let resolver = TerminalResolver::stdio(input.clone());
    let mut dispatcher = Dispatcher::new(book, Box::new(resolver));

    let mut stdout = io::stdout();
    run_session(&mut dispatcher, &repository, &input, &mut stdout)?;

    info!("Contact book closed");
    Ok(())
}
