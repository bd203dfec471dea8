//! Todo store with change notification.
//!
//! # Responsibility
//! - Wrap a `TodoRepository` with create-or-update, remove, list and count.
//! - Publish exactly one `ChangedEvent` after each committed mutation.
//!
//! # Invariants
//! - No validation: empty text is accepted as-is; callers must pre-check.
//! - Removing an absent id commits nothing and publishes nothing.
//! - Failed writes publish nothing.
//! - Single-threaded: the store is shared through `Rc`, never across threads.

use crate::event::{ChangeKind, ChangedEvent, EventChannel, Subscription};
use crate::model::todo::{TodoId, TodoItem};
use crate::repo::todo_repo::{RepoResult, TodoRepository, WriteOutcome};
use log::{debug, error, info};

/// Explicitly constructed todo store, injected into the screen.
pub struct TodoStore<R: TodoRepository> {
    repo: R,
    changes: EventChannel<ChangedEvent>,
}

impl<R: TodoRepository> TodoStore<R> {
    /// Creates a store over the provided repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            changes: EventChannel::new("todo_changed"),
        }
    }

    /// Inserts `item` or overwrites the item sharing its id.
    ///
    /// Publishes `Created` or `Updated` once the write has committed.
    pub fn create_or_update(&self, item: &TodoItem) -> RepoResult<ChangeKind> {
        let outcome = self.repo.upsert(item).map_err(|err| {
            error!(
                "event=todo_upsert module=store status=error id={} error={err}",
                item.id
            );
            err
        })?;

        let kind = match outcome {
            WriteOutcome::Inserted => ChangeKind::Created,
            WriteOutcome::Updated => ChangeKind::Updated,
        };
        info!(
            "event=todo_upsert module=store status=ok id={} kind={kind:?} text_len={}",
            item.id,
            item.text.chars().count()
        );
        self.changes.publish(ChangedEvent { kind, id: item.id });
        Ok(kind)
    }

    /// Deletes the item with `id` if present.
    ///
    /// Returns `Ok(false)` without publishing when no item matched.
    pub fn remove_by_id(&self, id: TodoId) -> RepoResult<bool> {
        let removed = self.repo.delete(id).map_err(|err| {
            error!("event=todo_remove module=store status=error id={id} error={err}");
            err
        })?;

        if !removed {
            debug!("event=todo_remove module=store status=skipped reason=absent id={id}");
            return Ok(false);
        }

        info!("event=todo_remove module=store status=ok id={id}");
        self.changes.publish(ChangedEvent {
            kind: ChangeKind::Removed,
            id,
        });
        Ok(true)
    }

    /// Returns a snapshot of all items in storage order.
    pub fn get_all(&self) -> RepoResult<Vec<TodoItem>> {
        self.repo.list()
    }

    /// Returns the current item count.
    pub fn get_size(&self) -> RepoResult<usize> {
        self.repo.count()
    }

    /// Registers `listener` for change notifications until the guard drops.
    pub fn subscribe(
        &self,
        listener: impl FnMut(&ChangedEvent) + 'static,
    ) -> Subscription<ChangedEvent> {
        self.changes.subscribe(listener)
    }

    /// Number of active change listeners.
    pub fn subscriber_count(&self) -> usize {
        self.changes.listener_count()
    }
}
