use std::time::Duration;

use color_eyre::eyre::Result;
use log::{LevelFilter, info};

mod cli;
mod config;
mod convert;
mod output;
mod watch;

use cli::Cli;
use config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so config loading can log too
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  let config = Config::load(&cli)?;

  let sources = convert::collect_sources(&cli.paths);
  if sources.is_empty() {
    info!("No convertible source files found");
    return Ok(());
  }

  convert::convert_all(&sources, &config, true)?;

  if cli.watch {
    info!("Watching... Ctrl+c to exit");
    let poller =
      watch::Poller::new(Duration::from_secs(config.watch_interval_secs));
    poller.run(|| convert::convert_all(&sources, &config, false))?;
  }

  Ok(())
}
