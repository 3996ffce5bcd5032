use super::Frame;
use crate::config::hotkeys::build_footer_text;
use crate::config::{HotkeyAction, InputMode};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph};

/// Format hotkeys for the current input mode as a display string.
///
pub fn footer_text(state: &State) -> String {
    let mode = state.input_mode();
    let hotkeys = state.get_hotkeys().for_mode(mode);
    match mode {
        InputMode::Picker => build_footer_text(
            hotkeys,
            &[
                (
                    HotkeyAction::StepUp,
                    "digit",
                    Some(HotkeyAction::StepDown),
                ),
                (
                    HotkeyAction::FocusPrev,
                    "wheel",
                    Some(HotkeyAction::FocusNext),
                ),
                (HotkeyAction::OpenThemeSelector, "theme", None),
                (HotkeyAction::ToggleLog, "log", None),
                (HotkeyAction::Quit, "quit", None),
            ],
        ),
        InputMode::ThemeSelector => build_footer_text(
            hotkeys,
            &[
                (
                    HotkeyAction::ThemeSelectorPrev,
                    "navigate",
                    Some(HotkeyAction::ThemeSelectorNext),
                ),
                (HotkeyAction::ThemeSelectorSelect, "apply", None),
                (HotkeyAction::ThemeSelectorCancel, "cancel", None),
            ],
        ),
    }
}

pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let text = footer_text(state);
    let paragraph = Paragraph::new(Line::styled(
        text,
        styling::muted_text_style(state.get_theme()),
    ));
    frame.render_widget(paragraph, size);
}
