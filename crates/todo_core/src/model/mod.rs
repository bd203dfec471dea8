//! Domain model for the todo screen.
//!
//! # Responsibility
//! - Define the data shared between storage, store and views.
//!
//! # Invariants
//! - Views only hold transient copies of `TodoItem`; the store owns the
//!   canonical rows.

pub mod todo;
