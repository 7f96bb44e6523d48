//! Terminal host: owns the screen and turns crossterm input into [`Event`]s.

use std::io::{self, Stdout, Write};
use std::thread;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use log::{debug, error};
use tokio::sync::mpsc::UnboundedSender;

use crate::monitor::Event;

/// Alternate screen in raw mode, restored when dropped.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide).context("Failed to enter alternate screen")?;
        Ok(Self { stdout })
    }

    /// Current size as a resize event.
    pub fn size(&self) -> Result<Event> {
        let (width, height) = terminal::size().context("Failed to query terminal size")?;
        Ok(Event::Resize { width, height })
    }

    /// Replaces the screen content with `frame`, clipped to the pane height.
    pub fn draw(&mut self, frame: &str) -> Result<()> {
        let (_, height) = terminal::size().unwrap_or((0, u16::MAX));
        queue!(self.stdout, Clear(ClearType::All))?;
        for (row, line) in frame.lines().take(height as usize).enumerate() {
            queue!(self.stdout, MoveTo(0, row as u16), Print(line))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.stdout, LeaveAlternateScreen, Show) {
            error!("Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = disable_raw_mode() {
            error!("Failed to disable raw mode: {}", e);
        }
    }
}

/// `q`, `Esc` and `Ctrl+C` end the program.
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Maps a crossterm event to a monitor event; key releases and mouse,
/// focus and paste events are dropped.
pub fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        _ => None,
    }
}

/// Reads terminal input on a dedicated thread until the receiver goes away.
///
/// A plain thread rather than a blocking tokio task, so a pending read
/// does not hold up runtime shutdown.
pub fn spawn_input_reader(tx: UnboundedSender<Event>) -> Result<()> {
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || loop {
            match event::read() {
                Ok(event) => {
                    let Some(event) = translate(event) else {
                        continue;
                    };
                    if tx.send(event).is_err() {
                        debug!("Input receiver closed");
                        break;
                    }
                }
                Err(e) => {
                    error!("Failed to read terminal input: {}", e);
                    break;
                }
            }
        })
        .context("Failed to spawn input thread")?;
    Ok(())
}
