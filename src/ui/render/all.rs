use super::{footer, log, main, tab_bar, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const LOG_PANE_HEIGHT: u16 = 8;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![Constraint::Min(5)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_PANE_HEIGHT));
    }
    constraints.push(Constraint::Length(3)); // Tab bar
    constraints.push(Constraint::Length(1)); // Footer

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    main(frame, rows[0], state);
    let mut next = 1;
    if state.is_log_visible() {
        log(frame, rows[next], state);
        next += 1;
    }
    tab_bar(frame, rows[next], state);
    footer(frame, rows[next + 1], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::hotkeys::{Hotkey, HotkeyAction};
    use crate::config::ViewHotkeys;
    use crate::logger::LogBuffer;
    use crate::state::{AddForm, Tab, LOG_CAPACITY};
    use crate::store::RecipeStore;
    use crate::ui::Theme;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(state: &mut State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| all(frame, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn home_lists_recipes_with_summaries() {
        let mut state = State::default();
        let screen = draw(&mut state);
        assert!(screen.contains("My Recipes"));
        assert!(screen.contains("Spaghetti Carbonara"));
        assert!(screen.contains("5 ingredients • 6 steps"));
        assert!(screen.contains("Chocolate Chip Cookies"));
        assert!(screen.contains("Home"));
        assert!(screen.contains("Settings"));
    }

    #[test]
    fn empty_home_names_the_configured_add_key() {
        let mut hotkeys = ViewHotkeys::default();
        hotkeys.home.insert(HotkeyAction::AddTab, Hotkey::char('a'));
        let mut state = State::new(
            RecipeStore::new(vec![]),
            Theme::default(),
            hotkeys,
            LogBuffer::new(LOG_CAPACITY),
        );
        let screen = draw(&mut state);
        assert!(screen.contains("No recipes yet. Press a to add one."));

        let mut hotkeys = ViewHotkeys::default();
        hotkeys.home.remove(&HotkeyAction::AddTab);
        let mut state = State::new(
            RecipeStore::new(vec![]),
            Theme::default(),
            hotkeys,
            LogBuffer::new(LOG_CAPACITY),
        );
        let screen = draw(&mut state);
        assert!(screen.contains("No recipes yet."));
        assert!(!screen.contains("Press"));
    }

    #[test]
    fn detail_numbers_steps() {
        let mut state = State::default();
        state.select_recipe(1);
        let screen = draw(&mut state);
        assert!(screen.contains("Spaghetti Carbonara"));
        assert!(screen.contains("Ingredients"));
        assert!(screen.contains("• Pasta"));
        assert!(screen.contains("1. Boil pasta until al dente"));
        assert!(screen.contains("6. Season with black pepper"));
    }

    #[test]
    fn missing_detail_renders_not_found() {
        let mut state = State::default();
        state.select_recipe(42);
        let screen = draw(&mut state);
        assert!(screen.contains("Recipe not found"));
    }

    #[test]
    fn add_form_shows_fields_and_gate() {
        let mut state = State::default();
        state.activate_tab(Tab::Add);
        let screen = draw(&mut state);
        assert!(screen.contains("Add Recipe"));
        assert!(screen.contains("Recipe Title"));
        assert!(screen.contains("Ingredients (one per line)"));
        assert!(screen.contains("Fill in every field"));

        *state.get_add_form_mut() = AddForm::from_text("Tacos", "Tortilla", "Cook");
        let screen = draw(&mut state);
        assert!(screen.contains("Ctrl+s: add recipe"));
    }

    #[test]
    fn settings_shows_app_info() {
        let mut state = State::default();
        state.activate_tab(Tab::Settings);
        let screen = draw(&mut state);
        assert!(screen.contains("Recipe Navigator"));
        assert!(screen.contains(&format!("Version {}", env!("CARGO_PKG_VERSION"))));
        assert!(screen.contains("A simple recipe browsing app"));
    }

    #[test]
    fn log_pane_is_optional() {
        let mut state = State::default();
        assert!(!draw(&mut state).contains("Log ("));
        state.toggle_log();
        assert!(draw(&mut state).contains("Log ("));
    }
}
