//! Persistence of domain entities on top of the storage medium

pub mod user;
