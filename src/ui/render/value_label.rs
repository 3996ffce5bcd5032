use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the sample controller's value label.
///
pub fn value_label(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let controller = state.controller();
    let line = Line::from(vec![
        Span::styled("Value: ", styling::muted_text_style(theme)),
        Span::styled(controller.value_label(), styling::banner_style(theme)),
        Span::styled(
            format!("   ({} changes)", controller.change_count()),
            styling::muted_text_style(theme),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, size);
}
