use super::Frame;
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

/// Render the theme selector as a popup over the given area.
///
pub fn theme_selector(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let names = Theme::available_themes();
    let area = centred(size, 30, names.len() as u16 + 2);

    let items: Vec<ListItem> = names
        .iter()
        .map(|name| {
            let marker = if *name == theme.name { "● " } else { "  " };
            ListItem::new(format!("{}{}", marker, name))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Theme ")
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme)),
        )
        .style(styling::normal_text_style(theme).bg(theme.surface.to_color()))
        .highlight_style(styling::active_list_item_style(theme));

    let mut list_state = ListState::default();
    list_state.select(Some(state.get_theme_selector_index()));
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Rectangle of at most the given size centred in `area`.
///
fn centred(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
