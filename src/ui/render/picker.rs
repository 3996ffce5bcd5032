use super::Frame;
use crate::picker::StripSlot;
use crate::state::State;
use crate::ui::widgets::{styling, DigitWheel};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

/// Width of one wheel including its border.
const WHEEL_WIDTH: u16 = 7;
const WHEEL_GAP: u16 = 1;

/// Render the three digit wheels and record where they landed.
///
pub fn picker(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Number Picker ")
        .title_style(styling::active_block_title_style())
        .border_style(styling::normal_block_border_style(&theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let areas = wheel_areas(inner);
    {
        let controller = state.controller();
        let picker = controller.picker();
        for slot in StripSlot::ALL {
            let title = slot.place_value().to_string();
            let wheel = DigitWheel::new(picker.strip(slot), &theme)
                .focused(slot == state.current_focus())
                .title(&title);
            frame.render_widget(wheel, areas[slot.index()]);
        }
    }
    state.set_wheel_areas(areas);
}

/// Split the picker area into three centred wheel columns.
///
pub fn wheel_areas(area: Rect) -> [Rect; 3] {
    let total = WHEEL_WIDTH * 3 + WHEEL_GAP * 2;
    let left = area.x + area.width.saturating_sub(total) / 2;
    let right = area.x + area.width;
    let mut areas = [Rect::default(); 3];
    for (index, slot_area) in areas.iter_mut().enumerate() {
        let x = (left + index as u16 * (WHEEL_WIDTH + WHEEL_GAP)).min(right);
        let width = WHEEL_WIDTH.min(right - x);
        *slot_area = Rect::new(x, area.y, width, area.height);
    }
    areas
}
