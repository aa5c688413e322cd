use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the about card.
///
pub fn settings(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let config_location = state
        .get_config_location()
        .unwrap_or("not saved")
        .to_string();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Recipe Navigator",
            styling::banner_style(theme),
        )),
        Line::from(Span::styled(
            format!("Version {}", env!("CARGO_PKG_VERSION")),
            styling::muted_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "A simple recipe browsing app",
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Theme: ", styling::muted_text_style(theme)),
            Span::styled(theme.name.clone(), styling::normal_text_style(theme)),
        ]),
        Line::from(vec![
            Span::styled("Config: ", styling::muted_text_style(theme)),
            Span::styled(config_location, styling::normal_text_style(theme)),
        ]),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Settings")
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme)),
        );
    frame.render_widget(card, size);
}
