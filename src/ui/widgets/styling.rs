use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the border style for a strip that is still moving.
///
pub fn moving_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.accent.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for active list items.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the background style for the whole screen.
///
pub fn background_style(theme: &Theme) -> Style {
    Style::default().bg(theme.background.to_color())
}

/// Return the style for the digit under a wheel's selection line.
///
pub fn selected_digit_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        active_list_item_style(theme)
    } else {
        Style::default()
            .fg(theme.primary.to_color())
            .bg(theme.surface.to_color())
            .add_modifier(Modifier::BOLD)
    }
}
