use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal,
};

use crate::text::fit_to_width;

/// Raw-mode alternate screen with mouse capture, restored on drop.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )
    }

    /// Queue `text` at `(x, y)`, clipped to `width` cells. Off-screen
    /// coordinates are skipped.
    pub fn print(
        &mut self,
        x: i32,
        y: i32,
        width: usize,
        text: &str,
        style: Style,
    ) -> io::Result<()> {
        let (Ok(col), Ok(row)) = (u16::try_from(x), u16::try_from(y)) else {
            return Ok(());
        };
        queue!(self.stdout, cursor::MoveTo(col, row), SetForegroundColor(style.color))?;
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            self.stdout,
            Print(fit_to_width(text, width)),
            SetAttribute(Attribute::Reset)
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub color: Color,
    pub bold: bool,
}

impl Style {
    pub const fn fg(color: Color) -> Self {
        Self { color, bold: false }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}
