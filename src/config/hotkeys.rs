//! Hotkey configuration management.
//!
//! This module defines the picker's key bindings: the actions a key can
//! trigger, the bindings per input mode, and the defaults.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Picker actions
    StepUp,
    StepDown,
    FocusNext,
    FocusPrev,
    OpenThemeSelector,
    ToggleLog,
    Quit,

    // Theme selector actions
    ThemeSelectorNext,
    ThemeSelectorPrev,
    ThemeSelectorSelect,
    ThemeSelectorCancel,
}

/// Input modes with their own binding tables.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Picker,
    ThemeSelector,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    fn plain(code: KeyCode) -> Hotkey {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::BackTab => KeyCode::BackTab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Serialized form of the key codes a binding may use.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::BackTab => KeyCodeSerde::BackTab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Keys bound to each action of one input mode. An action may have several
/// keys; the first one is shown in the footer.
///
pub type Bindings = HashMap<HotkeyAction, Vec<Hotkey>>;

/// Maps hotkey actions to their key bindings for each input mode.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkeys {
    #[serde(default = "default_picker_hotkeys")]
    pub picker: Bindings,
    #[serde(default = "default_theme_selector_hotkeys")]
    pub theme_selector: Bindings,
}

impl Default for Hotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl Hotkeys {
    /// Binding table for the given mode.
    ///
    pub fn for_mode(&self, mode: InputMode) -> &Bindings {
        match mode {
            InputMode::Picker => &self.picker,
            InputMode::ThemeSelector => &self.theme_selector,
        }
    }
}

/// Returns default hotkey mappings for all modes.
///
pub fn default_hotkeys() -> Hotkeys {
    Hotkeys {
        picker: default_picker_hotkeys(),
        theme_selector: default_theme_selector_hotkeys(),
    }
}

fn default_picker_hotkeys() -> Bindings {
    HashMap::from([
        (
            HotkeyAction::StepUp,
            vec![Hotkey::plain(KeyCode::Up), Hotkey::plain(KeyCode::Char('k'))],
        ),
        (
            HotkeyAction::StepDown,
            vec![
                Hotkey::plain(KeyCode::Down),
                Hotkey::plain(KeyCode::Char('j')),
            ],
        ),
        (
            HotkeyAction::FocusNext,
            vec![
                Hotkey::plain(KeyCode::Right),
                Hotkey::plain(KeyCode::Char('l')),
            ],
        ),
        (
            HotkeyAction::FocusPrev,
            vec![
                Hotkey::plain(KeyCode::Left),
                Hotkey::plain(KeyCode::Char('h')),
            ],
        ),
        (
            HotkeyAction::OpenThemeSelector,
            vec![Hotkey::plain(KeyCode::Char('t'))],
        ),
        (
            HotkeyAction::ToggleLog,
            vec![Hotkey::plain(KeyCode::Char('g'))],
        ),
        (HotkeyAction::Quit, vec![Hotkey::plain(KeyCode::Char('q'))]),
    ])
}

fn default_theme_selector_hotkeys() -> Bindings {
    HashMap::from([
        (
            HotkeyAction::ThemeSelectorNext,
            vec![
                Hotkey::plain(KeyCode::Down),
                Hotkey::plain(KeyCode::Char('j')),
            ],
        ),
        (
            HotkeyAction::ThemeSelectorPrev,
            vec![Hotkey::plain(KeyCode::Up), Hotkey::plain(KeyCode::Char('k'))],
        ),
        (
            HotkeyAction::ThemeSelectorSelect,
            vec![Hotkey::plain(KeyCode::Enter)],
        ),
        (
            HotkeyAction::ThemeSelectorCancel,
            vec![Hotkey::plain(KeyCode::Esc)],
        ),
    ])
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Gets the action bound to a KeyEvent in the given mode.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    mode: InputMode,
    hotkeys: &Hotkeys,
) -> Option<HotkeyAction> {
    hotkeys
        .for_mode(mode)
        .iter()
        .find(|(_, keys)| keys.iter().any(|hotkey| matches_hotkey(event, hotkey)))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &Bindings,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let parts: Vec<String> = actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let hotkey = primary_hotkey(hotkeys, *action)?;
            let paired = paired_action.and_then(|paired| primary_hotkey(hotkeys, paired));
            Some(match paired {
                Some(paired_hotkey) => format!(
                    " {}/{}: {}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey),
                    description
                ),
                None => format!(" {}: {}", format_hotkey_display(hotkey), description),
            })
        })
        .collect();
    parts.join(",")
}

fn primary_hotkey(hotkeys: &Bindings, action: HotkeyAction) -> Option<&Hotkey> {
    hotkeys.get(&action).and_then(|keys| keys.first())
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
