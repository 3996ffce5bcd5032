use super::gesture::WheelGestures;
use crate::config::{Config, Hotkeys, InputMode};
use crate::error::AppError;
use crate::picker::{DigitChange, NumberPickerView, StripSlot};
use crate::sample::SampleViewController;
use crate::ui::Theme;
use log::*;
use ratatui::layout::Rect;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Most log lines kept for the log panel.
pub const LOG_CAPACITY: usize = 500;

pub type LogBuffer = Arc<Mutex<Vec<String>>>;

/// Houses data representative of application state.
///
pub struct State {
    controller: Rc<SampleViewController>,
    focus: StripSlot,
    input_mode: InputMode,
    theme: Theme,
    theme_selector_index: usize,
    hotkeys: Hotkeys,
    // Content units, scaled from the per-digit config values
    scroll_step: f64,
    settle_speed: f64,
    wheel_gestures: WheelGestures,
    wheel_areas: [Rect; 3],
    terminal_size: Rect,
    show_log: bool,
    log_entries: LogBuffer,
}

impl State {
    /// Build the picker and its host controller from the configuration.
    ///
    pub fn new(config: &Config) -> Result<State, AppError> {
        let picker = NumberPickerView::builder()
            .item_height(config.item_height)
            .value(config.initial_value)
            .build()?;
        debug!("Picker built at value {}", picker.value());
        Ok(State {
            controller: SampleViewController::new(picker),
            focus: StripSlot::Hundreds,
            input_mode: InputMode::Picker,
            theme: Theme::from_name_or_default(&config.theme_name),
            theme_selector_index: 0,
            hotkeys: config.hotkeys.clone(),
            scroll_step: config.scroll_step * config.item_height,
            settle_speed: config.settle_speed * config.item_height,
            wheel_gestures: WheelGestures::new(Duration::from_millis(config.settle_delay_ms)),
            wheel_areas: [Rect::default(); 3],
            terminal_size: Rect::default(),
            show_log: false,
            log_entries: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn controller(&self) -> &SampleViewController {
        &self.controller
    }

    /// Value of the picker's settled digits.
    ///
    pub fn value(&self) -> u16 {
        self.controller.picker().value()
    }

    pub fn current_focus(&self) -> StripSlot {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Step the focused strip by whole digits; the snap finishes on a tick.
    ///
    pub fn step_focused(&mut self, steps: i32) {
        let slot = self.focus;
        self.controller.picker_mut().step(slot, steps);
    }

    /// Apply a wheel notch to a strip, extending its gesture.
    ///
    pub fn scroll_wheel(&mut self, slot: StripSlot, notches: i32, now: Instant) {
        self.focus = slot;
        let delta = f64::from(notches) * self.scroll_step;
        self.controller.picker_mut().scroll_by(slot, delta);
        self.wheel_gestures.record(slot, now);
    }

    /// End wheel gestures that have gone quiet and advance snapping strips.
    /// Returns the digit changes completed on this tick.
    ///
    pub fn tick(&mut self, now: Instant) -> Vec<DigitChange> {
        let mut picker = self.controller.picker_mut();
        for slot in self.wheel_gestures.take_expired(now) {
            picker.end_scroll(slot);
        }
        picker.advance(self.settle_speed)
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn get_hotkeys(&self) -> &Hotkeys {
        &self.hotkeys
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn open_theme_selector(&mut self) {
        self.theme_selector_index = Theme::available_themes()
            .iter()
            .position(|name| *name == self.theme.name)
            .unwrap_or(0);
        self.input_mode = InputMode::ThemeSelector;
    }

    pub fn is_theme_selector_open(&self) -> bool {
        self.input_mode == InputMode::ThemeSelector
    }

    pub fn get_theme_selector_index(&self) -> usize {
        self.theme_selector_index
    }

    pub fn theme_selector_next(&mut self) {
        let count = Theme::available_themes().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % count;
    }

    pub fn theme_selector_prev(&mut self) {
        let count = Theme::available_themes().len();
        self.theme_selector_index = (self.theme_selector_index + count - 1) % count;
    }

    /// Apply the highlighted theme and close the selector.
    ///
    pub fn select_theme(&mut self) {
        if let Some(name) = Theme::available_themes().get(self.theme_selector_index) {
            info!("Switching theme to {}", name);
            self.theme = Theme::from_name_or_default(name);
        }
        self.input_mode = InputMode::Picker;
    }

    pub fn close_theme_selector(&mut self) {
        self.input_mode = InputMode::Picker;
    }

    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Remember where each wheel was drawn, for mouse hit-testing.
    ///
    pub fn set_wheel_areas(&mut self, areas: [Rect; 3]) {
        self.wheel_areas = areas;
    }

    /// Strip whose wheel covers the given terminal cell, if any.
    ///
    pub fn slot_at(&self, column: u16, row: u16) -> Option<StripSlot> {
        self.wheel_areas
            .iter()
            .position(|area| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .and_then(StripSlot::from_index)
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
    }

    /// Shared buffer the logger appends to.
    ///
    pub fn log_buffer(&self) -> LogBuffer {
        Arc::clone(&self.log_entries)
    }

    /// Most recent log lines, oldest first.
    ///
    pub fn get_log_entries(&self, limit: usize) -> Vec<String> {
        match self.log_entries.lock() {
            Ok(entries) => {
                let start = entries.len().saturating_sub(limit);
                entries[start..].to_vec()
            }
            Err(_) => vec![],
        }
    }

    /// Picker value to persist on exit.
    ///
    pub fn write_back(&self, config: &mut Config) {
        config.initial_value = self.value();
        config.theme_name = self.theme.name.clone();
    }
}

/// Append a line to a log buffer, dropping the oldest beyond capacity.
///
pub fn push_log(buffer: &LogBuffer, line: String) {
    if let Ok(mut entries) = buffer.lock() {
        entries.push(line);
        if entries.len() > LOG_CAPACITY {
            let excess = entries.len() - LOG_CAPACITY;
            entries.drain(..excess);
        }
    }
}
