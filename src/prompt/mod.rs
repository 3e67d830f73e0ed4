//! A single-line text input prompt.
//!
//! A slimmed-down input field for form-style flows: value editing with the
//! usual emacs-ish bindings, a placeholder, optional validation, and echo
//! modes for secret entry. Unlike a full readline widget there is no
//! suggestion engine, clipboard paste, or horizontal scrolling; the intended
//! use is short values typed into a wizard step.
//!
//! # Examples
//!
//! ```rust
//! use stagehand::prompt::{self, EchoMode};
//! use stagehand::Component;
//!
//! let mut input = prompt::new();
//! input.focus();
//! input.placeholder = "postgres://localhost/app".to_string();
//! input.echo_mode = EchoMode::Password;
//! input.set_value("hunter2");
//! assert_eq!(input.value(), "hunter2");
//! ```

mod keymap;
mod model;
mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};

/// Controls how typed characters are echoed back to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoMode {
    /// Display text as typed. This is the default.
    #[default]
    Normal,
    /// Display the echo character in place of each typed character, as
    /// password fields do.
    Password,
    /// Display nothing as characters are entered.
    None,
}

/// A validation function; returning an error surfaces it on the model.
pub type ValidateFunc = Box<dyn Fn(&str) -> Result<(), String> + Send>;
