//! Infrastructure layer
//!
//! Everything that touches the outside world:
//! - terminal setup and event polling
//! - command line and configuration files
//! - the key-value storage medium behind the record store

pub mod cli;
pub mod config;
pub mod storage;
pub mod tui;
