use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::event::Event;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Full-screen terminal session.
///
/// Owns raw mode and the alternate screen for its lifetime and restores both
/// on drop. Frames are drawn into a back buffer and only changed cells are
/// written out.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    mouse: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        Self::with_mouse(true)
    }

    pub fn with_mouse(mouse: bool) -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        queue!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        if mouse {
            queue!(stdout, event::EnableMouseCapture)?;
        }
        stdout.flush()?;

        let (width, height) = terminal::size()?;
        log::info!("terminal session started at {}x{}", width, height);

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            mouse,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Waits up to `timeout` for input and returns every pending event.
    /// `None` blocks until at least one raw event arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut raw: Vec<CrosstermEvent> = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => true,
        };

        if has_event {
            raw.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                raw.push(event::read()?);
            }
        }

        Ok(raw.into_iter().filter_map(Event::from_crossterm).collect())
    }

    /// Draws one frame. `paint` receives a cleared buffer sized to the
    /// terminal.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("terminal resized to {}x{}", width, height);
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            queue!(
                self.stdout,
                SetAttribute(Attribute::Reset),
                terminal::Clear(terminal::ClearType::All)
            )?;
        }

        self.current_buffer.clear();
        paint(&mut self.current_buffer);
        self.flush_diff()?;

        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = TextStyle::new();

        // Reset to known state at start
        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(rgb(last_fg)),
            SetBackgroundColor(rgb(last_bg))
        )?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                queue!(self.stdout, SetForegroundColor(rgb(cell.fg)))?;
                last_fg = cell.fg;
            }
            if cell.bg != last_bg {
                queue!(self.stdout, SetBackgroundColor(rgb(cell.bg)))?;
                last_bg = cell.bg;
            }

            if cell.style != last_style {
                // Intensity and reverse have no single "off" that leaves the
                // rest alone, so restyle from scratch.
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                queue!(
                    self.stdout,
                    SetForegroundColor(rgb(cell.fg)),
                    SetBackgroundColor(rgb(cell.bg))
                )?;
                apply_style(&mut self.stdout, cell.style)?;
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn rgb(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn apply_style(out: &mut impl Write, style: TextStyle) -> io::Result<()> {
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

/// Raw passthrough to the terminal, for escape sequences the buffer cannot
/// express (OSC 52 clipboard writes).
impl Write for Terminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.mouse {
            let _ = queue!(self.stdout, event::DisableMouseCapture);
        }
        let _ = queue!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
        log::info!("terminal restored");
    }
}
