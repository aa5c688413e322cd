use super::Frame;
use crate::config::hotkeys::{format_hotkey_display, HotkeyAction};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the recent log lines, newest at the bottom.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let toggle = state
        .get_hotkeys()
        .for_route(state.current_route())
        .get(&HotkeyAction::ToggleLog)
        .map(format_hotkey_display)
        .unwrap_or_else(|| "-".to_string());
    let title = format!("Log ({}: hide)", toggle);

    let visible_rows = usize::from(size.height.saturating_sub(2));
    let items: Vec<ListItem> = state
        .get_log_entries(visible_rows)
        .into_iter()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry,
                styling::muted_text_style(theme),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(list, size);
}
