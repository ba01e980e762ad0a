use std::io;

/// Puts the terminal into raw mode + alternate screen on entry and restores
/// it on drop. Restore is best-effort and runs at most once, so an explicit
/// `restore()` before drop is safe.
pub struct TerminalGuard {
    mouse_capture: bool,
    restored: bool,
}

impl TerminalGuard {
    pub fn enter(mouse_capture: bool) -> io::Result<Self> {
        use crossterm::{
            cursor,
            event::EnableMouseCapture,
            execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        if mouse_capture {
            execute!(io::stdout(), EnableMouseCapture)?;
        }
        Ok(Self {
            mouse_capture,
            restored: false,
        })
    }

    pub fn restore(&mut self) -> io::Result<()> {
        use crossterm::{
            cursor,
            event::DisableMouseCapture,
            execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        if self.restored {
            return Ok(());
        }
        self.restored = true;

        // Try every step even if one fails.
        let mut first_err: Option<io::Error> = None;

        if self.mouse_capture {
            if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
                first_err.get_or_insert(err);
            }
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
            first_err.get_or_insert(err);
        }
        if let Err(err) = disable_raw_mode() {
            first_err.get_or_insert(err);
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
