//! Text rendering of the monitor state.
//!
//! [`render`] picks the layout from the pane size. Output is a single
//! block of newline separated lines with ANSI colours; it depends only on
//! the state and the dimensions.

pub(crate) mod colours;
pub mod compact;
pub mod full;
pub mod text;

use crate::monitor::MonitorState;

/// Panes shorter than this use the compact view.
pub const COMPACT_HEIGHT_THRESHOLD: u16 = 10;

pub fn render(state: &MonitorState, width: u16, height: u16) -> String {
    if width == 0 || height == 0 {
        return "Initializing...".to_string();
    }

    if height < COMPACT_HEIGHT_THRESHOLD {
        compact::render(state)
    } else {
        full::render(state, width)
    }
}
