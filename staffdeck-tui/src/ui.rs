//! Terminal painter.
//!
//! Raw-mode/alternate-screen guard plus positioned text drawing. Screens
//! are small, so every frame is drawn in full; the terminal is restored on
//! drop even when the event loop bails with an error.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The dashboard's primary color.
pub const ACCENT: Color = Color::Rgb { r: 255, g: 98, b: 0 };
pub const MUTED: Color = Color::DarkGrey;
pub const ERROR: Color = Color::Red;

/// Styling for one run of text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStyle {
    fg: Option<Color>,
    bold: bool,
    dim: bool,
    reverse: bool,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

/// Owns the terminal for the application lifetime.
pub struct Painter {
    out: Stdout,
    width: u16,
    height: u16,
}

impl Painter {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

        let (width, height) = terminal::size()?;
        Ok(Self { out, width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Start a frame: refresh the size and clear the screen.
    pub fn begin(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.width = width;
        self.height = height;
        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Draw a run of text at the given cell.
    pub fn text(&mut self, x: u16, y: u16, content: &str, style: TextStyle) -> io::Result<()> {
        if y >= self.height || x >= self.width {
            return Ok(());
        }

        queue!(self.out, cursor::MoveTo(x, y))?;
        if let Some(color) = style.fg {
            queue!(self.out, SetForegroundColor(color))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        if style.reverse {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }

        let available = (self.width - x) as usize;
        queue!(self.out, Print(clip(content, available)))?;
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    /// Flush the queued frame to the terminal.
    pub fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for Painter {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Display width of a string in terminal columns.
pub fn width_of(content: &str) -> usize {
    content.width()
}

/// Truncate to at most `width` terminal columns.
pub fn clip(content: &str, width: usize) -> String {
    let mut taken = 0;
    let mut result = String::new();
    for ch in content.chars() {
        let w = ch.width().unwrap_or(0);
        if taken + w > width {
            break;
        }
        taken += w;
        result.push(ch);
    }
    result
}

/// Truncate/pad to exactly `width` terminal columns.
pub fn pad(content: &str, width: usize) -> String {
    let mut result = clip(content, width);
    let used = result.width();
    result.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    result
}

/// Center within `width` terminal columns.
pub fn center(content: &str, width: usize) -> String {
    let clipped = clip(content, width);
    let used = clipped.width();
    let left = width.saturating_sub(used) / 2;
    let mut result = String::new();
    result.extend(std::iter::repeat_n(' ', left));
    result.push_str(&clipped);
    result
}
