//! Terminal setup and teardown with panic safety.

use std::io;
use std::panic;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Puts the terminal into raw mode on the alternate screen and restores it on drop.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the panic message is printed
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;

        Ok(Self { _private: () })
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    Ok(())
}
