//! Inspector application state and logic

use crate::console::Console;
use crate::demo::Demo;
use crate::memory::frame::LocalVar;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Locals,
    Bytes,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (locals -> bytes -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Locals => FocusedPane::Bytes,
            FocusedPane::Bytes => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Locals,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Locals => FocusedPane::Output,
            FocusedPane::Bytes => FocusedPane::Locals,
            FocusedPane::Output => FocusedPane::Bytes,
        }
    }
}

/// The main application state
pub struct App {
    /// The demonstration whose frame is inspected
    pub demo: Demo,

    /// What the demonstration printed
    pub console: Console,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index of the selected local, in declaration order
    pub selected: usize,

    /// Per-pane scroll offsets
    pub bytes_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app for a demonstration that has already printed to `console`
    pub fn new(demo: Demo, console: Console) -> Self {
        App {
            demo,
            console,
            focused_pane: FocusedPane::Locals,
            selected: 0,
            bytes_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// The selected local, if any
    pub fn selected_local(&self) -> Option<(&str, &LocalVar)> {
        self.demo.frame().locals().nth(self.selected)
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Left: Locals (top) | Bytes (bottom); right: Output
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[0]);

        super::panes::render_locals_pane(
            frame,
            left_rows[0],
            self.demo.frame(),
            self.selected,
            self.focused_pane == FocusedPane::Locals,
        );

        let selected = self.demo.frame().locals().nth(self.selected);
        super::panes::render_bytes_pane(
            frame,
            left_rows[1],
            selected,
            self.focused_pane == FocusedPane::Bytes,
            &mut self.bytes_scroll,
        );

        super::panes::render_output_pane(
            frame,
            columns[1],
            &self.console,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.selected,
            self.demo.frame().len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Locals => self.select(self.selected.saturating_sub(1)),
                FocusedPane::Bytes => {
                    self.bytes_scroll = self.bytes_scroll.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Locals => self.select(self.selected.saturating_add(1)),
                FocusedPane::Bytes => {
                    self.bytes_scroll = self.bytes_scroll.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
            },
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(usize::MAX),
            _ => {}
        }
    }

    /// Select a local, clamped to the frame
    fn select(&mut self, index: usize) {
        let last = self.demo.frame().len().saturating_sub(1);
        self.selected = index.min(last);
        self.bytes_scroll = 0;
        self.status_message = match self.selected_local() {
            Some((name, var)) => format!("{} at 0x{:08x}", name, var.address),
            None => String::from("No locals"),
        };
    }
}
