//! Terminal mouse setup
//!
//! Mouse capture is toggled around the TUI session; failures surface as
//! `WellchatError::Io`.

use std::io::Write;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::error::WellchatError;

pub fn enable_mouse_capture<W: Write>(out: &mut W) -> Result<(), WellchatError> {
    execute!(out, EnableMouseCapture).map_err(WellchatError::from)
}

pub fn disable_mouse_capture<W: Write>(out: &mut W) -> Result<(), WellchatError> {
    execute!(out, DisableMouseCapture).map_err(WellchatError::from)
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod terminal_tests;
