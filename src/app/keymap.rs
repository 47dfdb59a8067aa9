use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    /// Action name -> key spec, e.g. `toggle_palette = "ctrl+p"`.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    // Bindings for the main view. The palette captures text input and only
    // honours `palette_toggle` on top of its fixed navigation keys.
    pub global: HashMap<KeyEvent, Action>,
    pub palette_toggle: KeyEvent,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();

        global.insert(ctrl('k'), Action::TogglePalette);
        global.insert(key(':'), Action::TogglePalette);
        global.insert(key('/'), Action::TogglePalette);
        global.insert(plain(KeyCode::Backspace), Action::NavigateBack);
        global.insert(key('h'), Action::NavigateBack);
        global.insert(key('q'), Action::Quit);
        global.insert(ctrl('c'), Action::Quit);

        let mut keymap = Self {
            global,
            palette_toggle: ctrl('k'),
        };

        if let Some(custom) = &config.custom {
            for (name, spec) in custom {
                let (Some(action), Some(event)) = (action_by_name(name), parse_key_spec(spec))
                else {
                    tracing::warn!(name = %name, spec = %spec, "ignoring invalid key binding");
                    continue;
                };
                keymap.rebind(action, event);
            }
        }

        keymap
    }

    fn rebind(&mut self, action: Action, event: KeyEvent) {
        let event = normalize(event);
        self.global.retain(|_, bound| *bound != action);
        if action == Action::TogglePalette {
            self.palette_toggle = event;
        }
        self.global.insert(event, action);
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.global.get(&normalize(event)).cloned()
    }

    #[must_use]
    pub fn is_palette_toggle(&self, event: KeyEvent) -> bool {
        normalize(event) == self.palette_toggle
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

/// Drops the kind/state fields and the SHIFT a terminal may report with
/// symbols like `:`, so lookups match the bindings built by `KeyEvent::new`.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

fn action_by_name(name: &str) -> Option<Action> {
    match name {
        "toggle_palette" => Some(Action::TogglePalette),
        "back" => Some(Action::NavigateBack),
        "quit" => Some(Action::Quit),
        _ => None,
    }
}

/// Parses specs like `ctrl+k`, `q`, `backspace` or `alt+enter`.
pub fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut parts: Vec<&str> = spec.split('+').map(str::trim).collect();
    let last = parts.pop()?;

    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let code = match last.to_ascii_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        lower => {
            let mut chars = last.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
                    if !(1..=12).contains(&n) {
                        return None;
                    }
                    KeyCode::F(n)
                }
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

fn key(c: char) -> KeyEvent {
    plain(KeyCode::Char(c))
}

fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
