//! Terminal recipe browser: an in-memory recipe store, a navigation
//! history with per-intent policies and a ratatui front end.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod store;
pub mod ui;
