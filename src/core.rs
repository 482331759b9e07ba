//! Application core
//!
//! - [`msg`]: messages exchanged between presenters, runner and coordinator
//! - [`translator`]: pure key routing
//! - [`coordinator`]: applies messages to the store and the presenters

pub mod coordinator;
pub mod msg;
pub mod translator;
