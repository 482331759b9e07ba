//! # userdeck
//!
//! A terminal UI for keeping a small list of user records: name, email,
//! phone and an optional category. Records are stored as one JSON document
//! in a key-value slot on disk.
//!
//! ## Layout
//!
//! - [`domain`]: the record type and text sanitizing
//! - [`repositories`]: the record store over a [`KeyValueStorage`](infrastructure::storage::KeyValueStorage)
//! - [`model`]: presenter state (list, editor, dialog, notifications)
//! - [`presentation`]: ratatui widgets and keybinding configuration
//! - [`core`]: messages, key routing and the coordinator
//! - [`integration`]: the event loop
//! - [`infrastructure`]: terminal, config, CLI and storage backends
//!
//! ## Example
//!
//! ```rust
//! use userdeck::domain::record::UserRecord;
//! use userdeck::infrastructure::storage::MemoryStorage;
//! use userdeck::repositories::user::UserRepository;
//!
//! let mut store = UserRepository::new(MemoryStorage::new(), "userdeck_users");
//! let saved = store.save(UserRecord::new("Ana").with_email("a@x.com")).unwrap();
//!
//! assert!(saved.id().is_some_and(|id| id.starts_with("user_")));
//! assert_eq!(store.list_all(), vec![saved]);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod repositories;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
