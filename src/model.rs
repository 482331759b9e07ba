//! Presenter state
//!
//! Each module owns the state of one UI region and exposes the operations
//! the coordinator drives. Drawing lives in `presentation::widgets`.

pub mod dialog;
pub mod editor;
pub mod list;
pub mod notifications;
