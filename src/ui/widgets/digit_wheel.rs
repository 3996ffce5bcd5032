//! Digit wheel widget.
//!
//! Draws one digit strip as a vertical wheel: the digit under the strip's
//! offset sits on the middle row, neighbours wrap 9/0 above and below.

use super::styling;
use crate::picker::{DigitStrip, DIGIT_COUNT};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};

pub struct DigitWheel<'a> {
    strip: &'a DigitStrip,
    theme: &'a Theme,
    focused: bool,
    title: Option<&'a str>,
}

impl<'a> DigitWheel<'a> {
    pub fn new(strip: &'a DigitStrip, theme: &'a Theme) -> Self {
        DigitWheel {
            strip,
            theme,
            focused: false,
            title: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    fn border_style(&self) -> ratatui::style::Style {
        if !self.strip.is_idle() {
            styling::moving_block_border_style(self.theme)
        } else if self.focused {
            styling::active_block_border_style(self.theme)
        } else {
            styling::normal_block_border_style(self.theme)
        }
    }
}

/// Digit shown `distance` rows away from the middle of a wheel.
///
pub fn digit_at_distance(centre: u8, distance: i32) -> u8 {
    (i32::from(centre) + distance).rem_euclid(i32::from(DIGIT_COUNT)) as u8
}

impl Widget for DigitWheel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style());
        if let Some(title) = self.title {
            block = block.title(title);
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let centre_row = inner.height / 2;
        let centre_digit = self.strip.digit();
        for row in 0..inner.height {
            let distance = i32::from(row) - i32::from(centre_row);
            let digit = digit_at_distance(centre_digit, distance);
            let style = if distance == 0 {
                styling::selected_digit_style(self.theme, self.focused)
            } else {
                styling::muted_text_style(self.theme)
            };
            let y = inner.y + row;
            if distance == 0 {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
            }
            let x = inner.x + inner.width.saturating_sub(1) / 2;
            buf.set_string(x, y, digit.to_string(), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(buf: &Buffer, x: u16) -> String {
        (1..buf.area.height - 1)
            .map(|y| buf.get(x, y).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_digit_at_distance_wraps() {
        assert_eq!(digit_at_distance(0, -1), 9);
        assert_eq!(digit_at_distance(9, 1), 0);
        assert_eq!(digit_at_distance(5, -12), 3);
    }

    #[test]
    fn test_wheel_centres_current_digit() {
        let strip = DigitStrip::with_digit(1.0, 1).unwrap();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 5, 7);
        let mut buf = Buffer::empty(area);
        DigitWheel::new(&strip, &theme).focused(true).render(area, &mut buf);
        assert_eq!(column(&buf, 2), "90123");
    }

    #[test]
    fn test_wheel_follows_live_offset() {
        let mut strip = DigitStrip::with_digit(1.0, 4).unwrap();
        strip.scroll_by(2.2);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 3, 5);
        let mut buf = Buffer::empty(area);
        DigitWheel::new(&strip, &theme).render(area, &mut buf);
        assert_eq!(column(&buf, 1), "567");
    }

    #[test]
    fn test_wheel_survives_tiny_area() {
        let strip = DigitStrip::default();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        DigitWheel::new(&strip, &theme).title("x").render(area, &mut buf);
    }
}
