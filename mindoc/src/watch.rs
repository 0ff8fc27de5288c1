//! Watch mode.
use std::{thread, time::Duration};

use color_eyre::eyre::Result;
use log::debug;

/// Fixed-interval polling loop.
///
/// Re-runs its task forever, sleeping for the configured interval between
/// iterations. There is no change detection: every tick re-reads and
/// re-renders everything. Cancellation is external process termination; the
/// interval is the only state crossing iterations.
pub struct Poller {
  interval: Duration,
}

impl Poller {
  #[must_use]
  pub const fn new(interval: Duration) -> Self {
    Self { interval }
  }

  /// Run one task iteration followed by the interval sleep.
  ///
  /// # Errors
  ///
  /// Propagates the task's error.
  pub fn tick<F>(&self, task: &mut F) -> Result<()>
  where
    F: FnMut() -> Result<()>,
  {
    task()?;
    thread::sleep(self.interval);
    Ok(())
  }

  /// Poll forever. Returns only when the task fails.
  ///
  /// # Errors
  ///
  /// Propagates the first task error.
  pub fn run<F>(&self, mut task: F) -> Result<()>
  where
    F: FnMut() -> Result<()>,
  {
    loop {
      self.tick(&mut task)?;
      debug!("re-rendered watched sources");
    }
  }
}
