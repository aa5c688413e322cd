use super::{add_recipe, home, recipe_detail, settings, Frame};
use crate::state::{Route, State};
use ratatui::layout::Rect;

/// Render the page for the current route.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    match *state.current_route() {
        Route::Home => home(frame, size, state),
        Route::Detail(_) => recipe_detail(frame, size, state),
        Route::Add => add_recipe(frame, size, state),
        Route::Settings => settings(frame, size, state),
    }
}
