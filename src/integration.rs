//! Integration layer
//!
//! Connects the terminal, the coordinator and the message queue into the
//! running application.

pub mod app_runner;
