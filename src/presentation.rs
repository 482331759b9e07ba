//! Presentation layer
//!
//! Ratatui widgets that draw presenter state, and the keybinding table read
//! from the config file.

pub mod config;
pub mod widgets;
