//! Type-safe key bindings for the widgets in this crate.
//!
//! A [`Binding`] pairs one or more key presses with optional help text, and a
//! [`KeyMap`] groups a component's bindings for help rendering. Bindings are
//! usually built with the option-style constructors:
//!
//! ```rust
//! use stagehand::key::{new_binding, with_help, with_keys_str};
//!
//! let next = new_binding(vec![
//!     with_keys_str(&["pgdown", "right", "l"]),
//!     with_help("→/l", "next page"),
//! ]);
//! assert_eq!(next.help().key, "→/l");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code together with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code reported by the terminal.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text for a binding: how the key is labeled and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"←/h"`.
    pub key: String,
    /// Description of the action, e.g. `"prev page"`.
    pub desc: String,
}

/// A key binding: the key presses that trigger it plus help metadata.
///
/// A disabled binding never matches and is skipped by help views.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from a list of key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text (builder style).
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns the key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the binding's help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding currently participates in matching.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the given key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        !self.disabled
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.mods == msg.modifiers)
    }
}

/// An option applied while constructing a [`Binding`] via [`new_binding`].
#[derive(Debug, Clone)]
pub enum BindingOpt {
    /// Adds key presses to the binding.
    Keys(Vec<KeyPress>),
    /// Sets the binding's help text.
    WithHelp(Help),
    /// Marks the binding disabled.
    Disabled,
}

/// Creates a binding from construction options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(mut keys) => binding.keys.append(&mut keys),
            BindingOpt::WithHelp(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Option: bind the given key presses.
pub fn with_keys<K: Into<KeyPress> + Copy>(keys: &[K]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().map(|&k| k.into()).collect())
}

/// Option: bind keys described by name, e.g. `"pgup"`, `"ctrl+c"`, `"h"`.
///
/// Recognized names are the navigation keys (`left`, `right`, `up`, `down`,
/// `home`, `end`, `pgup`, `pgdown`), editing keys (`enter`, `esc`, `tab`,
/// `backspace`, `delete`, `space`), and single characters, optionally
/// prefixed with `ctrl+`, `alt+`, or `shift+`. Unrecognized names are
/// ignored.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|s| parse_key(s)).collect())
}

/// Option: attach help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::WithHelp(Help {
        key: key.to_string(),
        desc: desc.to_string(),
    })
}

/// Option: construct the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Reports whether the key message triggers the given binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether the key message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Groups a component's bindings for help rendering.
pub trait KeyMap {
    /// Bindings shown in the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings shown in the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut rest = s;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = rest.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyPress { code, mods })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(
            parse_key("pgup"),
            Some(KeyPress {
                code: KeyCode::PageUp,
                mods: KeyModifiers::NONE
            })
        );
        assert_eq!(
            parse_key("ctrl+c"),
            Some(KeyPress {
                code: KeyCode::Char('c'),
                mods: KeyModifiers::CONTROL
            })
        );
        assert_eq!(parse_key("nonsense"), None);
    }

    #[test]
    fn test_binding_matches() {
        let b = new_binding(vec![
            with_keys_str(&["left", "h"]),
            with_help("←/h", "prev page"),
        ]);
        assert!(b.matches(&key(KeyCode::Left)));
        assert!(b.matches(&key(KeyCode::Char('h'))));
        assert!(!b.matches(&key(KeyCode::Right)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let b = new_binding(vec![with_keys_str(&["ctrl+c"])]);
        assert!(!b.matches(&key(KeyCode::Char('c'))));
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL
        }));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["enter"])]);
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter)));
        b.set_enabled(true);
        assert!(b.matches(&key(KeyCode::Enter)));

        let disabled = new_binding(vec![with_keys_str(&["enter"]), with_disabled()]);
        assert!(!disabled.matches(&key(KeyCode::Enter)));
    }
}
