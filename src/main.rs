use std::env;
use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use pixel_muncher::app::App;
use pixel_muncher::config::LaunchOptions;
use pixel_muncher::constants::LOOP_TIME;
use pixel_muncher::formatter::TickFormatter;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Sends log lines to `file`, since the terminal itself is taken by the game.
fn init_tracing(file: File) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(filter)
        .event_format(TickFormatter)
        .with_writer(Mutex::new(file))
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")
}

pub fn main() -> Result<()> {
    let options = LaunchOptions::parse(env::args().skip(1)).context("Invalid arguments")?;

    let log_file = File::create(&options.log_file)
        .with_context(|| format!("Could not create log file {}", options.log_file.display()))?;
    init_tracing(log_file)?;

    let mut app = App::new(&options).context("Could not start the game")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run()? {}

    info!(high_score = app.game.session().high_score(), "Exiting");
    Ok(())
}
