use crate::config::hotkeys::get_action_for_event;
use crate::config::HotkeyAction;
use crate::error::AppError;
use crate::state::State;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel. The input thread
/// holds the only sender, so the channel closes when that thread exits.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<CrosstermEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(input) => {
                        if tx.send(Event::Input(input)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler::from_receiver(rx)
    }

    fn from_receiver(rx: mpsc::Receiver<Event<CrosstermEvent>>) -> Self {
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool, AppError> {
        let next = self
            .rx
            .recv()
            .map_err(|e| AppError::Terminal(e.to_string()))?;
        match next {
            Event::Input(CrosstermEvent::Key(key)) => return Ok(handle_key(key, state)),
            Event::Input(CrosstermEvent::Mouse(mouse)) => {
                handle_mouse(mouse, state, Instant::now())
            }
            Event::Input(_) => (),
            Event::Tick => {
                state.tick(Instant::now());
            }
        }
        Ok(true)
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    let action = match get_action_for_event(&key, state.input_mode(), state.get_hotkeys()) {
        Some(action) => action,
        None => {
            trace!("Unbound key {:?}", key.code);
            return true;
        }
    };
    debug!("Processing {:?} for key {:?}", action, key.code);
    match action {
        HotkeyAction::StepUp => state.step_focused(-1),
        HotkeyAction::StepDown => state.step_focused(1),
        HotkeyAction::FocusNext => state.focus_next(),
        HotkeyAction::FocusPrev => state.focus_prev(),
        HotkeyAction::OpenThemeSelector => state.open_theme_selector(),
        HotkeyAction::ToggleLog => state.toggle_log(),
        HotkeyAction::Quit => return false,
        HotkeyAction::ThemeSelectorNext => state.theme_selector_next(),
        HotkeyAction::ThemeSelectorPrev => state.theme_selector_prev(),
        HotkeyAction::ThemeSelectorSelect => state.select_theme(),
        HotkeyAction::ThemeSelectorCancel => state.close_theme_selector(),
    }
    true
}

/// Turn wheel notches over a digit wheel into scroll gestures.
///
pub fn handle_mouse(mouse: MouseEvent, state: &mut State, now: Instant) {
    if state.is_theme_selector_open() {
        return;
    }
    let notches = match mouse.kind {
        MouseEventKind::ScrollDown => 1,
        MouseEventKind::ScrollUp => -1,
        _ => return,
    };
    if let Some(slot) = state.slot_at(mouse.column, mouse.row) {
        state.scroll_wheel(slot, notches, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::picker::StripSlot;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn state() -> State {
        State::new(&Config::new()).unwrap()
    }

    fn wheel(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state();
        assert!(!handle_key(key(KeyCode::Char('q')), &mut state));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_key(ctrl_c, &mut state));
        assert!(handle_key(key(KeyCode::Char('z')), &mut state));
    }

    #[test]
    fn test_arrow_keys_drive_focused_strip() {
        let mut state = state();
        assert!(handle_key(key(KeyCode::Right), &mut state));
        assert!(handle_key(key(KeyCode::Right), &mut state));
        assert_eq!(state.current_focus(), StripSlot::Units);
        handle_key(key(KeyCode::Down), &mut state);
        state.tick(Instant::now());
        assert_eq!(state.value(), 1);
        handle_key(key(KeyCode::Left), &mut state);
        handle_key(key(KeyCode::Up), &mut state);
        state.tick(Instant::now());
        assert_eq!(state.value(), 91);
    }

    #[test]
    fn test_vim_keys_drive_focused_strip() {
        let mut state = state();
        assert_eq!(state.current_focus(), StripSlot::Hundreds);
        handle_key(key(KeyCode::Char('l')), &mut state);
        assert_eq!(state.current_focus(), StripSlot::Tens);
        handle_key(key(KeyCode::Char('j')), &mut state);
        state.tick(Instant::now());
        assert_eq!(state.value(), 10);
        handle_key(key(KeyCode::Char('h')), &mut state);
        assert_eq!(state.current_focus(), StripSlot::Hundreds);
        handle_key(key(KeyCode::Char('k')), &mut state);
        state.tick(Instant::now());
        assert_eq!(state.value(), 910);
    }

    #[test]
    fn test_closed_channel_is_terminal_error() {
        let (tx, rx) = mpsc::channel();
        let handler = Handler::from_receiver(rx);
        let mut state = state();
        tx.send(Event::Tick).unwrap();
        drop(tx);
        assert!(handler.handle_next(&mut state).unwrap());
        let result = handler.handle_next(&mut state);
        assert!(matches!(result, Err(AppError::Terminal(_))));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = state();
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert!(handle_key(release, &mut state));
    }

    #[test]
    fn test_theme_selector_keys() {
        let mut state = state();
        handle_key(key(KeyCode::Char('t')), &mut state);
        assert!(state.is_theme_selector_open());
        // Up/Down belong to the selector while it is open
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.get_theme_selector_index(), 1);
        handle_key(key(KeyCode::Esc), &mut state);
        assert!(!state.is_theme_selector_open());
        assert_eq!(state.get_theme().name, "tokyo-night");
        state.tick(Instant::now());
        assert_eq!(state.value(), 0);
    }

    #[test]
    fn test_toggle_log_key() {
        let mut state = state();
        handle_key(key(KeyCode::Char('g')), &mut state);
        assert!(state.is_log_visible());
        handle_key(key(KeyCode::Char('g')), &mut state);
        assert!(!state.is_log_visible());
    }

    #[test]
    fn test_wheel_over_strip_scrolls_it() {
        let mut state = state();
        state.set_wheel_areas([
            Rect::new(0, 0, 4, 7),
            Rect::new(4, 0, 4, 7),
            Rect::new(8, 0, 4, 7),
        ]);
        let start = Instant::now();
        for _ in 0..3 {
            handle_mouse(wheel(MouseEventKind::ScrollUp, 5, 3), &mut state, start);
        }
        handle_mouse(wheel(MouseEventKind::ScrollUp, 50, 3), &mut state, start);
        assert_eq!(state.current_focus(), StripSlot::Tens);
        assert_eq!(state.controller().picker().strip(StripSlot::Tens).digit(), 9);

        for i in 1..10 {
            state.tick(start + Duration::from_millis(100 * i));
        }
        assert_eq!(state.value(), 90);
    }
}
