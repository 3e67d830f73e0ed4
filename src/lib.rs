#![warn(missing_docs)]

//! # stagehand
//!
//! Small building blocks for [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs)
//! applications: an owned pagination state model for list views, a
//! single-line prompt widget, and an interactive setup wizard (shipped as
//! the `setup-env` binary) that bootstraps `.env` configuration files.
//!
//! Components follow the Elm Architecture pattern, with `update()` applied
//! to incoming messages and `view()` rendering current state, so they slot
//! directly into a bubbletea-rs model.
//!
//! ## Pagination
//!
//! The paginator owns its state: pages are 1-indexed, every navigation
//! operation clamps the page into range rather than failing, and the page
//! count is assigned from server-reported metadata instead of being derived
//! locally.
//!
//! ```rust
//! use stagehand::paginator::{Model, Pagination};
//!
//! let mut pager = Model::new();
//! pager.set_pagination(Pagination { page: 1, limit: 10, total: 45, pages: 5 });
//!
//! pager.next_page();
//! assert_eq!(pager.page(), 2);
//! assert!(pager.has_next());
//! assert_eq!(pager.view(), "2/5");
//! ```
//!
//! ## Environment setup
//!
//! The `setup` wizard prompts for a database connection string and an API
//! key (masked), generates two random hex secrets, and writes the backend
//! and frontend env files:
//!
//! ```text
//! $ setup-env
//! Environment setup
//!
//! Database connection string:
//! > postgres://localhost/app
//!
//! enter confirm • esc cancel
//! ```
//!
//! ## Key bindings
//!
//! Components use the type-safe binding system from the [`key`] module:
//!
//! ```rust
//! use stagehand::key::{new_binding, with_help, with_keys_str};
//!
//! let quit = new_binding(vec![
//!     with_keys_str(&["esc", "ctrl+c"]),
//!     with_help("esc", "cancel"),
//! ]);
//! ```

pub mod envfile;
pub mod key;
pub mod paginator;
pub mod prompt;
pub mod secret;
pub mod setup;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives keyboard input; a blurred one ignores it.
/// `focus()` may return a command for initialization work, which the caller
/// should hand to the bubbletea runtime.
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use envfile::EnvFile;
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use paginator::{Model as Paginator, Pagination};
pub use prompt::{new as prompt_new, EchoMode, Model as Prompt, ValidateFunc};
pub use secret::{hex_secret, DEFAULT_SECRET_BYTES};
pub use setup::{Model as SetupWizard, Outcome as SetupOutcome, SetupError};

/// Prelude module for convenient imports.
///
/// ```rust
/// use stagehand::prelude::*;
///
/// let pager = Paginator::new();
/// assert_eq!(pager.page(), 1);
/// ```
pub mod prelude {
    pub use crate::envfile::EnvFile;
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
        Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::paginator::{Model as Paginator, Pagination};
    pub use crate::prompt::{new as prompt_new, EchoMode, Model as Prompt, ValidateFunc};
    pub use crate::secret::{hex_secret, DEFAULT_SECRET_BYTES};
    pub use crate::setup::{Model as SetupWizard, Outcome as SetupOutcome, SetupError};
    pub use crate::Component;
}
