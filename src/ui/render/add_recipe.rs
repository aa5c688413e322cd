use super::Frame;
use crate::config::hotkeys::{format_hotkey_display, HotkeyAction};
use crate::state::{AddFormField, Route, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the add recipe form according to state.
///
pub fn add_recipe(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let submit_hint = state
        .get_hotkeys()
        .for_route(&Route::Add)
        .get(&HotkeyAction::SubmitForm)
        .map(format_hotkey_display);

    let outer = Block::default()
        .title(Span::styled("Add Recipe", styling::banner_style(&theme)))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(&theme));
    let inner = outer.inner(size);
    frame.render_widget(outer, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let form = state.get_add_form_mut();
    let focused = form.focused();
    for (index, field) in AddFormField::ALL.iter().enumerate() {
        let border_style = if *field == focused {
            styling::active_block_border_style(&theme)
        } else {
            styling::normal_block_border_style(&theme)
        };
        let textarea = form.field_mut(*field);
        textarea.set_block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(&*textarea, rows[index]);
    }

    let gate = match (form.is_submittable(), submit_hint) {
        (true, Some(hint)) => Line::from(Span::styled(
            format!(" {}: add recipe", hint),
            styling::heading_style(theme.success.to_color()),
        )),
        (true, None) => Line::from(Span::styled(
            " Ready to add",
            styling::heading_style(theme.success.to_color()),
        )),
        (false, _) => Line::from(Span::styled(
            " Fill in every field to add the recipe",
            styling::muted_text_style(&theme),
        )),
    };
    frame.render_widget(Paragraph::new(gate), rows[3]);
}
