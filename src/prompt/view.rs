//! View rendering for the prompt.

use super::model::Model;
use super::EchoMode;

impl Model {
    /// Renders the prompt in its current state.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let value: String = self.value.iter().collect();
        let display: Vec<char> = self.echo_transform(&value).chars().collect();
        let pos = self.pos.min(display.len());

        let before: String = display[..pos].iter().collect();
        let mut v = self.text_style.render(&before);

        if self.focus {
            let under = display.get(pos).copied().unwrap_or(' ');
            v.push_str(&self.cursor_view(under));
            if pos + 1 < display.len() {
                let after: String = display[pos + 1..].iter().collect();
                v.push_str(&self.text_style.render(&after));
            }
        } else if pos < display.len() {
            let after: String = display[pos..].iter().collect();
            v.push_str(&self.text_style.render(&after));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn placeholder_view(&self) -> String {
        let mut v = String::new();
        let chars: Vec<char> = self.placeholder.chars().collect();

        if self.focus {
            v.push_str(&self.cursor_view(chars[0]));
            if chars.len() > 1 {
                let rest: String = chars[1..].iter().collect();
                v.push_str(&self.placeholder_style.render(&rest));
            }
        } else {
            v.push_str(&self.placeholder_style.render(&self.placeholder));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    // The cursor is a static reverse-video block; a linear wizard has no
    // event loop budget for blink timers.
    fn cursor_view(&self, under: char) -> String {
        self.cursor_style
            .clone()
            .inline(true)
            .reverse(true)
            .render(&under.to_string())
    }

    pub(super) fn echo_transform(&self, v: &str) -> String {
        match self.echo_mode {
            EchoMode::Password => self
                .echo_character
                .to_string()
                .repeat(v.chars().count()),
            EchoMode::None => String::new(),
            EchoMode::Normal => v.to_string(),
        }
    }
}
