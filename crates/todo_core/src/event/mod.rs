//! In-process notifications between store, controller and screen.
//!
//! # Responsibility
//! - Define the typed events exchanged by the todo screen components.
//! - Provide a single-threaded publish/subscribe channel with scoped
//!   subscriptions.
//!
//! # Invariants
//! - One `ChangedEvent` per committed store mutation.
//! - Delivery is synchronous, in registration order.

pub mod channel;

use crate::model::todo::TodoId;

pub use channel::{EventChannel, ListenerId, Subscription};

/// What a committed store mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Removed,
}

/// Emitted by `TodoStore` after every committed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangedEvent {
    pub kind: ChangeKind,
    /// Item affected by the mutation.
    pub id: TodoId,
}

/// Emitted by a list row's delete control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowDeleteRequested {
    pub id: TodoId,
}
