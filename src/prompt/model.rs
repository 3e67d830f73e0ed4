//! Core model and update logic for the prompt.

use super::keymap::{default_key_map, KeyMap};
use super::{EchoMode, ValidateFunc};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// A single-line text input model.
///
/// The value is stored as a `Vec<char>` so cursor positions are character
/// positions, not byte offsets. Styling fields are public and can be themed
/// directly; the value and cursor are private and move only through the
/// editing methods.
pub struct Model {
    /// The prompt printed before the input, e.g. `"> "`.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style for the typed text.
    pub text_style: Style,
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Style for the cursor block.
    pub cursor_style: Style,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Maximum number of characters accepted; 0 means no limit.
    pub char_limit: usize,
    /// How typed characters are echoed.
    pub echo_mode: EchoMode,
    /// The mask character used by [`EchoMode::Password`].
    pub echo_character: char,
    /// The most recent validation error, if any.
    pub err: Option<String>,

    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    pub(super) focus: bool,
    pub(super) validate: Option<ValidateFunc>,
}

/// Creates a new prompt model with default settings.
///
/// The returned model is not focused; call `focus()` before feeding it key
/// messages.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new(),
        key_map: default_key_map(),
        char_limit: 0,
        echo_mode: EchoMode::Normal,
        echo_character: '*',
        err: None,
        value: Vec::new(),
        pos: 0,
        focus: false,
        validate: None,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Returns the current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value, truncating to the character limit and moving the
    /// cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        let mut chars: Vec<char> = value.chars().collect();
        if self.char_limit > 0 && chars.len() > self.char_limit {
            chars.truncate(self.char_limit);
        }
        self.err = self.validate_chars(&chars);
        self.value = chars;
        self.pos = self.value.len();
    }

    /// Returns the cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamping to the value's bounds.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Moves the cursor to the start of the value.
    pub fn cursor_start(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor to the end of the value.
    pub fn cursor_end(&mut self) {
        self.pos = self.value.len();
    }

    /// Clears the value, the cursor, and any validation error.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
        self.err = None;
    }

    /// Sets the validation function applied after every edit.
    pub fn set_validate(&mut self, validate: ValidateFunc) {
        self.validate = Some(validate);
        self.err = self.validate_chars(&self.value);
    }

    /// Handles key messages. Inert while the prompt is blurred.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if matches_binding(key_msg, &self.key_map.character_backward) {
            if self.pos > 0 {
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            if self.pos < self.value.len() {
                self.pos += 1;
            }
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
                self.err = self.validate_chars(&self.value);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
                self.err = self.validate_chars(&self.value);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.value.drain(..self.pos);
            self.pos = 0;
            self.err = self.validate_chars(&self.value);
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.value.truncate(self.pos);
            self.err = self.validate_chars(&self.value);
        } else {
            self.handle_character_input(key_msg);
        }

        None
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        // Plain character input; shift is allowed since it's encoded in the
        // char's case.
        if let KeyCode::Char(ch) = key_msg.key {
            if key_msg.modifiers.contains(KeyModifiers::CONTROL)
                || key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                return;
            }
            if self.char_limit > 0 && self.value.len() >= self.char_limit {
                return;
            }
            self.value.insert(self.pos, ch);
            self.pos += 1;
            self.err = self.validate_chars(&self.value);
        }
    }

    pub(super) fn validate_chars(&self, chars: &[char]) -> Option<String> {
        let validate = self.validate.as_ref()?;
        let value: String = chars.iter().collect();
        validate(&value).err()
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
