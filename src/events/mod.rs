//! Event handling module.
//!
//! This module contains the terminal event handler: input polling and the
//! mapping of key presses to state intents.

pub mod terminal;
