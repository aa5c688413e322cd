use super::Frame;
use crate::state::{State, Tab};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the bottom tab bar. The detail page highlights no tab.
///
pub fn tab_bar(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let active = state.current_route().tab();

    let mut spans = Vec::new();
    for (index, tab) in Tab::ALL.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", styling::muted_text_style(theme)));
        }
        let style = if active == Some(*tab) {
            styling::active_list_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        spans.push(Span::styled(format!(" {} {} ", index + 1, tab.title()), style));
    }

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(bar, size);
}
