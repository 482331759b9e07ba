//! Terminal abstraction
//!
//! The runner only talks to [`TuiLike`], so the crossterm-backed terminal and
//! the in-memory test terminal are interchangeable.

pub mod real;
pub mod test;

use std::future::Future;
use std::io;
use std::pin::Pin;

use color_eyre::eyre::Result;
use crossterm::cursor;
use crossterm::event::{DisableBracketedPaste, DisableMouseCapture, KeyEvent, MouseEvent};
use crossterm::terminal::{self, LeaveAlternateScreen};
use ratatui::layout::Rect;

pub type Frame<'a> = ratatui::Frame<'a>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Init,
    Quit,
    Error,
    Closed,
    Tick,
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    /// Gives the terminal back to the shell and stops the process until it
    /// is continued. Implementations without a real terminal just return.
    fn suspend(&mut self) -> Result<()>;
    fn resume(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: Rect) -> Result<()>;
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}

/// Leaves raw mode and the alternate screen if they are active.
///
/// Safe to call from a panic hook: it does not need a terminal handle.
pub fn restore() -> Result<()> {
    if terminal::is_raw_mode_enabled()? {
        crossterm::execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()?;
    }
    Ok(())
}
