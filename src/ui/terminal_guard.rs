//! Raw mode and alternate screen handling for the TUI.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// Restores the terminal when dropped, including on early `?` returns.
/// Panics are covered separately by [`install_panic_hook`].
pub struct TerminalGuard {
    active: AtomicBool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        tracing::debug!("terminal switched to alternate screen");
        Ok(Self {
            active: AtomicBool::new(true),
        })
    }

    /// Whether this guard still owes a restore
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Best-effort restore; every step is attempted even if one fails
    pub fn cleanup() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = io::stdout().flush();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active.swap(false, Ordering::SeqCst) {
            Self::cleanup();
        }
    }
}

/// Restore the terminal before the default hook prints the panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        TerminalGuard::cleanup();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inactive_guard() -> TerminalGuard {
        TerminalGuard {
            active: AtomicBool::new(false),
        }
    }

    #[test]
    fn test_inactive_guard_skips_cleanup() {
        let guard = inactive_guard();
        assert!(!guard.is_active());
        drop(guard);
    }

    #[test]
    fn test_drop_clears_active_flag_once() {
        let guard = TerminalGuard {
            active: AtomicBool::new(true),
        };
        assert!(guard.is_active());
        assert!(guard.active.swap(false, Ordering::SeqCst));
        assert!(!guard.is_active());
        drop(guard);
    }

    #[test]
    fn test_cleanup_outside_terminal_does_not_panic() {
        TerminalGuard::cleanup();
    }
}
