//! Terminal setup and teardown around the inspector
//!
//! Raw mode and the alternate screen are undone on every exit path, including
//! a failure halfway through setup. The first error wins: a failure in the
//! event loop is reported even when restoring the terminal also fails.

use super::App;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Take over the terminal, run the inspector, and hand the terminal back
pub fn run_inspector(app: &mut App) -> io::Result<()> {
    enable_raw_mode()?;

    let res = (|| -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        app.run(&mut terminal)
    })();

    first_error(res, restore_terminal())
}

/// Leave the alternate screen and raw mode, attempting every step
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    first_error(raw, screen)
}

/// Keep the earlier error when both results failed
pub(crate) fn first_error(first: io::Result<()>, second: io::Result<()>) -> io::Result<()> {
    first.and(second)
}
