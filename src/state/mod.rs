//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that turns user intents into store and navigation calls
//! - Navigation types (Route, Tab, Navigator and its policies)
//! - Add form types (AddForm, AddFormField, NewRecipe)

mod form;
mod navigation;

pub use form::{parse_lines, AddForm, AddFormField, NewRecipe};
pub use navigation::{NavOptions, NavPolicies, Navigator, PopUpTo, Route, Tab};

// State struct and its methods are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, LOG_CAPACITY};
