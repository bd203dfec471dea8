//! Screen composition and lifecycle.
//!
//! # Responsibility
//! - Bind widgets, build the list adapter and the input controller.
//! - Render list and count, and re-render on store changes while resumed.
//!
//! # Invariants
//! - Store and row-delete subscriptions exist only in `[Resumed, Paused)`.
//! - Every exit path (pause, destroy, drop) releases them.

pub mod coordinator;
pub mod lifecycle;
