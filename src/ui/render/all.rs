use super::*;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Block, Paragraph},
};

/// Height of the picker panel: a five-digit window plus borders.
const PICKER_HEIGHT: u16 = 9;
const LOG_HEIGHT: u16 = 10;

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    state.set_terminal_size(size);
    frame.render_widget(
        Block::default().style(styling::background_style(state.get_theme())),
        size,
    );

    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Min(PICKER_HEIGHT),
        Constraint::Length(3),
    ];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let title = Paragraph::new(BANNER)
        .style(styling::banner_style(state.get_theme()))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    picker(frame, rows[1], state);
    value_label(frame, rows[2], state);
    if state.is_log_visible() {
        log(frame, rows[3], state);
    }
    footer(frame, rows[rows.len() - 1], state);

    if state.is_theme_selector_open() {
        theme_selector(frame, size, state);
    }
}

pub const BANNER: &str = "number picker";
