//! Domain logic
//!
//! This module contains domain-specific types and helpers:
//! - The user record entity
//! - Text sanitizing for the terminal surface

pub mod record;
pub mod text;
