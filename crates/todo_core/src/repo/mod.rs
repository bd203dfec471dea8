//! Persistence contracts for todo items.
//!
//! # Responsibility
//! - Define the storage gateway used by `TodoStore`.
//! - Keep SQL details out of the store and the screen.
//!
//! # Invariants
//! - `list` returns rows in storage insertion order; an overwrite keeps the
//!   row's original position.
//! - `count` always equals `list().len()` for the same storage state.

pub mod memory_repo;
pub mod todo_repo;
