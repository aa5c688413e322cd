use super::Frame;
use crate::config::hotkeys::{format_hotkey_display, HotkeyAction};
use crate::state::{Route, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the recipe list according to state.
///
pub fn home(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let block = Block::default()
        .title(Span::styled("My Recipes", styling::banner_style(&theme)))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(&theme));

    if state.get_recipes().is_empty() {
        let hint = match state
            .get_hotkeys()
            .for_route(&Route::Home)
            .get(&HotkeyAction::AddTab)
        {
            Some(hotkey) => format!(
                "No recipes yet. Press {} to add one.",
                format_hotkey_display(hotkey)
            ),
            None => "No recipes yet.".to_string(),
        };
        let empty = Paragraph::new(hint)
            .style(styling::muted_text_style(&theme))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, size);
        return;
    }

    let items: Vec<ListItem> = state
        .get_recipes()
        .iter()
        .map(|recipe| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    recipe.title.clone(),
                    styling::heading_style(theme.primary.to_color()),
                )),
                Line::from(Span::styled(
                    format!("  {}", recipe.summary()),
                    styling::muted_text_style(&theme),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(styling::normal_text_style(&theme))
        .highlight_style(styling::active_list_item_style(&theme))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, size, state.get_recipes_list_state());
}
