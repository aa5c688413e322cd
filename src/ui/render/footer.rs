use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::state::{Route, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for a route.
///
fn hints_for_route(route: &Route, state: &State) -> String {
    let hotkeys = state.get_hotkeys().for_route(route);
    match route {
        Route::Home => build_footer_text(
            hotkeys,
            &[
                (
                    HotkeyAction::NavigateNext,
                    "move",
                    Some(HotkeyAction::NavigatePrev),
                ),
                (HotkeyAction::Select, "open", None),
                (HotkeyAction::ToggleLog, "log", None),
                (HotkeyAction::Quit, "quit", None),
            ],
        ),
        Route::Detail(_) => build_footer_text(
            hotkeys,
            &[
                (
                    HotkeyAction::NavigateNext,
                    "scroll",
                    Some(HotkeyAction::NavigatePrev),
                ),
                (HotkeyAction::Back, "back", None),
                (HotkeyAction::Quit, "quit", None),
            ],
        ),
        Route::Add => build_footer_text(
            hotkeys,
            &[
                (
                    HotkeyAction::NextField,
                    "field",
                    Some(HotkeyAction::PrevField),
                ),
                (HotkeyAction::SubmitForm, "submit", None),
                (HotkeyAction::Back, "back", None),
            ],
        ),
        Route::Settings => build_footer_text(
            hotkeys,
            &[
                (HotkeyAction::Back, "back", None),
                (HotkeyAction::ToggleLog, "log", None),
                (HotkeyAction::Quit, "quit", None),
            ],
        ),
    }
}

/// Render the footer with key hints on the left and the route on the right.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let route = *state.current_route();

    let label = match route {
        Route::Home => "HOME:",
        Route::Detail(_) => "RECIPE:",
        Route::Add => "ADD:",
        Route::Settings => "SETTINGS:",
    };
    let controls = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(theme.accent.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            hints_for_route(&route, state),
            Style::default().fg(theme.warning.to_color()),
        ),
    ]);

    let right = Line::from(Span::styled(
        format!(" {}", route),
        Style::default().fg(theme.text_muted.to_color()),
    ));
    let right_width = u16::try_from(right.width()).unwrap_or(0);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(right_width)])
        .split(size);

    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Left),
        columns[0],
    );
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), columns[1]);
}
