//! User-configurable parts of the UI

pub mod keybindings;

pub use keybindings::{Action, KeyBindings};
