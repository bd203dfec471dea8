//! Input controller: text entry, submit and row-delete handling.
//!
//! # Responsibility
//! - Keep the submit action enabled only while the input is non-empty.
//! - Persist submitted text as a new todo, then reset the input widgets.
//! - Forward row-delete requests to the store while subscribed.
//!
//! # Invariants
//! - Empty input never reaches the store.
//! - Widgets are only reset after the store write succeeded.
//! - Holds no reference to the screen; only its own widgets and the store.

use crate::event::{EventChannel, RowDeleteRequested, Subscription};
use crate::model::todo::{TodoId, TodoItem};
use crate::repo::todo_repo::{RepoResult, TodoRepository};
use crate::store::todo_store::TodoStore;
use crate::view::{SoftKeyboard, SubmitButton, TextField};
use log::{debug, error, info};
use std::rc::{Rc, Weak};

/// Key identity carried by a hardware key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Other(u32),
}

/// Phase of a hardware key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

/// Editor action reported by the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Soft keyboard "done"/commit action (no key event attached).
    Done,
    /// Hardware key event.
    Key { code: KeyCode, action: KeyAction },
}

impl EditorAction {
    /// Soft-keyboard commit or hardware Enter key-down.
    pub fn commits(self) -> bool {
        matches!(
            self,
            Self::Done
                | Self::Key {
                    code: KeyCode::Enter,
                    action: KeyAction::Down,
                }
        )
    }
}

/// Result of one submit gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new item was stored with this id.
    Created(TodoId),
    /// Input was empty; nothing was stored.
    IgnoredEmpty,
}

pub struct InputController<R: TodoRepository + 'static> {
    store: Rc<TodoStore<R>>,
    input: Box<dyn TextField>,
    submit: Box<dyn SubmitButton>,
    keyboard: Box<dyn SoftKeyboard>,
    row_delete_subscription: Option<Subscription<RowDeleteRequested>>,
}

impl<R: TodoRepository + 'static> InputController<R> {
    pub fn new(
        store: Rc<TodoStore<R>>,
        input: Box<dyn TextField>,
        submit: Box<dyn SubmitButton>,
        keyboard: Box<dyn SoftKeyboard>,
    ) -> Self {
        Self {
            store,
            input,
            submit,
            keyboard,
            row_delete_subscription: None,
        }
    }

    /// Initial widget state: the input starts empty, so submit is disabled.
    pub fn on_start(&mut self) {
        self.submit.set_enabled(false);
    }

    /// Subscribes to row-delete requests on the screen's channel.
    pub fn on_resume(&mut self, row_delete: &EventChannel<RowDeleteRequested>) {
        let store = Rc::downgrade(&self.store);
        self.row_delete_subscription = Some(row_delete.subscribe(move |request| {
            forward_row_delete(&store, request.id);
        }));
    }

    pub fn on_pause(&mut self) {
        self.row_delete_subscription = None;
    }

    pub fn is_listening_for_row_deletes(&self) -> bool {
        self.row_delete_subscription.is_some()
    }

    /// Re-evaluates the submit action after the input text changed.
    pub fn on_text_changed(&mut self) {
        let enabled = self.pending_item().is_some();
        self.submit.set_enabled(enabled);
    }

    /// Submit button tap.
    pub fn on_submit_clicked(&mut self) -> RepoResult<SubmitOutcome> {
        match self.pending_item() {
            Some(item) => self.register_todo(item).map(SubmitOutcome::Created),
            None => Ok(self.ignore_empty_submit()),
        }
    }

    /// Keyboard action on the input field.
    ///
    /// Always reports the action as consumed, even when nothing was stored.
    pub fn on_editor_action(&mut self, action: EditorAction) -> RepoResult<bool> {
        let Some(item) = self.pending_item() else {
            self.ignore_empty_submit();
            return Ok(true);
        };
        if action.commits() {
            self.register_todo(item)?;
        }
        Ok(true)
    }

    /// Deletes the item behind a row-delete request.
    pub fn on_row_delete_requested(&self, id: TodoId) -> RepoResult<bool> {
        self.store.remove_by_id(id)
    }

    /// Fresh item for the current input, or `None` when it must not be stored.
    fn pending_item(&self) -> Option<TodoItem> {
        let item = TodoItem::new(self.input.text());
        if item.is_blank() {
            None
        } else {
            Some(item)
        }
    }

    fn ignore_empty_submit(&mut self) -> SubmitOutcome {
        debug!("event=todo_submit module=controller status=skipped reason=empty_input");
        self.submit.set_enabled(false);
        SubmitOutcome::IgnoredEmpty
    }

    fn register_todo(&mut self, item: TodoItem) -> RepoResult<TodoId> {
        self.store.create_or_update(&item)?;

        self.input.set_text("");
        self.keyboard.hide();
        self.submit.set_enabled(false);
        info!("event=todo_submit module=controller status=ok id={}", item.id);
        Ok(item.id)
    }
}

fn forward_row_delete<R: TodoRepository>(store: &Weak<TodoStore<R>>, id: TodoId) {
    let Some(store) = store.upgrade() else {
        debug!("event=row_delete module=controller status=skipped reason=store_dropped id={id}");
        return;
    };
    if let Err(err) = store.remove_by_id(id) {
        error!("event=row_delete module=controller status=error id={id} error={err}");
    }
}
