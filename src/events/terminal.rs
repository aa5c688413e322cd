use crate::config::hotkeys::{get_action_for_event, HotkeyAction};
use crate::state::{Route, State, Tab};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                let input = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Some(key),
                        Ok(_) => None,
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => None,
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                };
                if let Some(key) = input {
                    if tx.send(Event::Input(key)).is_err() {
                        break;
                    }
                }
                // The receiver is gone once the UI loop has exited.
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => Ok(true),
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    let route = *state.current_route();
    let action = get_action_for_event(&key, &route, state.get_hotkeys()).or(match (route, key.code) {
        // Arrows always move outside the add form, where they belong to the text area.
        (Route::Add, _) => None,
        (_, KeyCode::Down) => Some(HotkeyAction::NavigateNext),
        (_, KeyCode::Up) => Some(HotkeyAction::NavigatePrev),
        _ => None,
    });
    match action {
        Some(HotkeyAction::Quit) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        Some(HotkeyAction::Back) => {
            state.go_back();
        }
        Some(HotkeyAction::ToggleLog) => {
            state.toggle_log();
        }
        Some(HotkeyAction::HomeTab) => {
            state.activate_tab(Tab::Home);
        }
        Some(HotkeyAction::AddTab) => {
            state.activate_tab(Tab::Add);
        }
        Some(HotkeyAction::SettingsTab) => {
            state.activate_tab(Tab::Settings);
        }
        Some(HotkeyAction::NavigateNext) => match route {
            Route::Detail(_) => {
                state.scroll_detail_down();
            }
            _ => {
                state.next_recipe();
            }
        },
        Some(HotkeyAction::NavigatePrev) => match route {
            Route::Detail(_) => {
                state.scroll_detail_up();
            }
            _ => {
                state.previous_recipe();
            }
        },
        Some(HotkeyAction::Select) => {
            state.select_current_recipe();
        }
        Some(HotkeyAction::NextField) => {
            state.get_add_form_mut().focus_next();
        }
        Some(HotkeyAction::PrevField) => {
            state.get_add_form_mut().focus_previous();
        }
        Some(HotkeyAction::SubmitForm) => {
            state.submit_add_form();
        }
        None if route == Route::Add => {
            state.add_form_input(key);
        }
        None => {}
    }
    true
}
