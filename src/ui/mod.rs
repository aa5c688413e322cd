//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal layout (route view, tab bar, footer, log pane)
//! - Theme management
//! - Widget styling helpers
//! - Route rendering (home list, recipe detail, add form, settings)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
