//! Todo store: the single authoritative holder of todo items.
//!
//! # Responsibility
//! - Gate every read and write of todo rows through one object.
//! - Announce each committed mutation to subscribers.

pub mod todo_store;
