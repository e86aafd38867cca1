#![forbid(unsafe_code)]

//! RAII terminal session.
//!
//! Enters raw mode, switches to the alternate screen, and hides the
//! cursor; everything is restored on drop and, via a panic hook, on
//! panics that would otherwise leave the terminal unusable.

use std::io::{self, Write};
use std::sync::OnceLock;

/// Raw-mode + alternate-screen session, restored on drop.
#[derive(Debug)]
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode, the alternate screen, and hide the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the control
    /// sequences cannot be written.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        tracing::info!("terminal raw mode enabled");

        let mut stdout = io::stdout();
        crossterm::execute!(
            stdout,
            crossterm::terminal::EnterAlternateScreen,
            crossterm::cursor::Hide
        )?;

        Ok(Self { active: true })
    }

    /// Current terminal size (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn cleanup(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        restore_terminal();
        tracing::info!("terminal restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(
        stdout,
        crossterm::cursor::Show,
        crossterm::terminal::LeaveAlternateScreen
    );
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}
