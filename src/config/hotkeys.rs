//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per route.

use crate::state::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    Quit,
    Back,
    ToggleLog,

    // Tab bar
    HomeTab,
    AddTab,
    SettingsTab,

    // Home list and detail scrolling
    NavigateNext,
    NavigatePrev,
    Select,

    // Add form
    NextField,
    PrevField,
    SubmitForm,
}

impl HotkeyAction {
    /// Every action in lookup order. When one key is bound to several
    /// actions on a route, the earliest action here wins.
    pub const ALL: [HotkeyAction; 12] = [
        HotkeyAction::Quit,
        HotkeyAction::Back,
        HotkeyAction::ToggleLog,
        HotkeyAction::HomeTab,
        HotkeyAction::AddTab,
        HotkeyAction::SettingsTab,
        HotkeyAction::NavigateNext,
        HotkeyAction::NavigatePrev,
        HotkeyAction::Select,
        HotkeyAction::NextField,
        HotkeyAction::PrevField,
        HotkeyAction::SubmitForm,
    ];
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Hotkey { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Hotkey::new(code, KeyModifiers::empty())
    }

    pub fn char(c: char) -> Self {
        Hotkey::plain(KeyCode::Char(c))
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        match self.code {
            KeyCode::Char(c) => state.serialize_field("char", &c)?,
            KeyCode::F(n) => state.serialize_field("number", &n)?,
            _ => state.skip_field("char")?,
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
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
            number: Option<u8>,
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
            KeyCodeSerde::F => match helper.number {
                Some(n) => KeyCode::F(n),
                None => {
                    return Err(serde::de::Error::custom(
                        "F key code requires 'number' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::BackTab => KeyCode::BackTab,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
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

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    F,
    Esc,
    Enter,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::F(_) => KeyCodeSerde::F,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::BackTab => KeyCodeSerde::BackTab,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char,
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
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

/// Maps hotkey actions to their key bindings for each route.
///
/// Deserializing merges the given bindings over `default_hotkeys()`, so a
/// file may name only the routes and actions it changes.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewHotkeys {
    pub home: HashMap<HotkeyAction, Hotkey>,
    pub detail: HashMap<HotkeyAction, Hotkey>,
    pub add: HashMap<HotkeyAction, Hotkey>,
    pub settings: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ViewHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl<'de> Deserialize<'de> for ViewHotkeys {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Overrides {
            #[serde(default)]
            home: HashMap<HotkeyAction, Hotkey>,
            #[serde(default)]
            detail: HashMap<HotkeyAction, Hotkey>,
            #[serde(default)]
            add: HashMap<HotkeyAction, Hotkey>,
            #[serde(default)]
            settings: HashMap<HotkeyAction, Hotkey>,
        }

        let overrides = Overrides::deserialize(deserializer)?;
        let mut hotkeys = default_hotkeys();
        hotkeys.home.extend(overrides.home);
        hotkeys.detail.extend(overrides.detail);
        hotkeys.add.extend(overrides.add);
        hotkeys.settings.extend(overrides.settings);
        Ok(hotkeys)
    }
}

impl ViewHotkeys {
    /// Return the bindings active on the given route.
    ///
    pub fn for_route(&self, route: &Route) -> &HashMap<HotkeyAction, Hotkey> {
        match route {
            Route::Home => &self.home,
            Route::Detail(_) => &self.detail,
            Route::Add => &self.add,
            Route::Settings => &self.settings,
        }
    }

    /// Describe every key bound to more than one action on the same route.
    ///
    pub fn conflicts(&self) -> Vec<String> {
        let routes = [
            ("home", &self.home),
            ("detail", &self.detail),
            ("add", &self.add),
            ("settings", &self.settings),
        ];
        let mut conflicts = Vec::new();
        for (name, bindings) in routes {
            let bound: Vec<(HotkeyAction, &Hotkey)> = HotkeyAction::ALL
                .iter()
                .filter_map(|action| bindings.get(action).map(|hotkey| (*action, hotkey)))
                .collect();
            for (index, (action, hotkey)) in bound.iter().enumerate() {
                let shadowed: Vec<String> = bound[index + 1..]
                    .iter()
                    .filter(|(_, other)| other == hotkey)
                    .map(|(other_action, _)| format!("{:?}", other_action))
                    .collect();
                if !shadowed.is_empty() && !bound[..index].iter().any(|(_, h)| h == hotkey) {
                    conflicts.push(format!(
                        "{}: {} is bound to {:?} and {}",
                        name,
                        format_hotkey_display(hotkey),
                        action,
                        shadowed.join(", ")
                    ));
                }
            }
        }
        conflicts
    }
}

/// Returns default hotkey mappings for all routes.
///
pub fn default_hotkeys() -> ViewHotkeys {
    // Outside the add form plain keys are free for navigation.
    let browse = [
        (HotkeyAction::Quit, Hotkey::char('q')),
        (HotkeyAction::Back, Hotkey::plain(KeyCode::Esc)),
        (HotkeyAction::ToggleLog, Hotkey::char('L')),
        (HotkeyAction::HomeTab, Hotkey::char('1')),
        (HotkeyAction::AddTab, Hotkey::char('2')),
        (HotkeyAction::SettingsTab, Hotkey::char('3')),
    ];

    let mut home: HashMap<HotkeyAction, Hotkey> = browse.iter().cloned().collect();
    home.insert(HotkeyAction::NavigateNext, Hotkey::char('j'));
    home.insert(HotkeyAction::NavigatePrev, Hotkey::char('k'));
    home.insert(HotkeyAction::Select, Hotkey::plain(KeyCode::Enter));

    let mut detail: HashMap<HotkeyAction, Hotkey> = browse.iter().cloned().collect();
    detail.insert(HotkeyAction::NavigateNext, Hotkey::char('j'));
    detail.insert(HotkeyAction::NavigatePrev, Hotkey::char('k'));

    let settings: HashMap<HotkeyAction, Hotkey> = browse.iter().cloned().collect();

    // Every other key press in the add form is text input.
    let add = HashMap::from([
        (HotkeyAction::Back, Hotkey::plain(KeyCode::Esc)),
        (HotkeyAction::NextField, Hotkey::plain(KeyCode::Tab)),
        (HotkeyAction::PrevField, Hotkey::plain(KeyCode::BackTab)),
        (
            HotkeyAction::SubmitForm,
            Hotkey::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        ),
        (HotkeyAction::HomeTab, Hotkey::plain(KeyCode::F(1))),
        (HotkeyAction::AddTab, Hotkey::plain(KeyCode::F(2))),
        (HotkeyAction::SettingsTab, Hotkey::plain(KeyCode::F(3))),
        (HotkeyAction::ToggleLog, Hotkey::plain(KeyCode::F(4))),
    ]);

    ViewHotkeys {
        home,
        detail,
        add,
        settings,
    }
}

/// Checks if a KeyEvent matches a Hotkey. Shift is ignored for keys whose
/// code already encodes it (characters and back-tab).
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    let significant = |modifiers: KeyModifiers| match event.code {
        KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
        _ => modifiers,
    };
    event.code == hotkey.code && significant(event.modifiers) == significant(hotkey.modifiers)
}

/// Gets the action for a KeyEvent on a specific route, checking actions in
/// `HotkeyAction::ALL` order.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    route: &Route,
    hotkeys: &ViewHotkeys,
) -> Option<HotkeyAction> {
    let bindings = hotkeys.for_route(route);
    HotkeyAction::ALL.iter().copied().find(|action| {
        bindings
            .get(action)
            .map_or(false, |hotkey| matches_hotkey(event, hotkey))
    })
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let parts: Vec<String> = actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let hotkey = hotkeys.get(action)?;
            let keys = match paired_action.and_then(|paired| hotkeys.get(&paired)) {
                Some(paired_hotkey) => format!(
                    "{}/{}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey)
                ),
                None => format_hotkey_display(hotkey),
            };
            Some(format!(" {}: {}", keys, description))
        })
        .collect();
    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }
    let key = match hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        other => format!("{:?}", other),
    };
    parts.push(key);
    parts.join("+")
}
