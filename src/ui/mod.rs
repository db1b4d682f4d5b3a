mod browse;
pub mod format;
mod prompts;

pub use browse::browse;
pub use prompts::input_text;

use anyhow::Result;
use crossterm::terminal;

/// Puts the terminal in raw mode for as long as it is alive.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
