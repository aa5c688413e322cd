use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the selected recipe with its ingredients and numbered steps.
///
pub fn recipe_detail(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let recipe = match state.get_detail_recipe() {
        Some(recipe) => recipe,
        None => {
            let missing = Paragraph::new("Recipe not found")
                .style(styling::muted_text_style(&theme))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(styling::normal_block_border_style(&theme)),
                );
            frame.render_widget(missing, size);
            return;
        }
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(size);

    let header = Paragraph::new(Line::from(Span::styled(
        recipe.title.clone(),
        styling::banner_style(&theme),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(&theme)),
    );
    frame.render_widget(header, rows[0]);

    let mut lines = vec![Line::from(Span::styled(
        "Ingredients",
        styling::heading_style(theme.ingredients.to_color()),
    ))];
    lines.extend(recipe.ingredients.iter().map(|ingredient| {
        Line::from(Span::styled(
            format!("• {}", ingredient),
            styling::normal_text_style(&theme),
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Steps",
        styling::heading_style(theme.steps.to_color()),
    )));
    lines.extend(recipe.steps.iter().enumerate().map(|(index, step)| {
        Line::from(Span::styled(
            format!("{}. {}", index + 1, step),
            styling::normal_text_style(&theme),
        ))
    }));

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.get_detail_scroll_offset(), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(&theme)),
        );
    frame.render_widget(body, rows[1]);
}
