//! Screen coordinator: lifecycle owner and renderer of the todo screen.
//!
//! # Responsibility
//! - Build the adapter and the input controller from bound widgets.
//! - Drive the lifecycle and keep subscriptions inside the resumed window.
//! - Route user input to the controller while the screen is interactive.
//!
//! # Invariants
//! - The rendered count equals `TodoStore::get_size()` after every render.
//! - The coordinator is the only owner of the controller; the controller
//!   never points back at it.

use crate::controller::input_controller::{EditorAction, InputController, SubmitOutcome};
use crate::event::{ChangedEvent, EventChannel, RowDeleteRequested, Subscription};
use crate::model::todo::{TodoId, TodoItem};
use crate::repo::todo_repo::{RepoResult, TodoRepository};
use crate::screen::lifecycle::{ScreenError, ScreenResult, ScreenState};
use crate::store::todo_store::TodoStore;
use crate::view::adapter::TodoListAdapter;
use crate::view::{CountLabel, ScreenWidgets};
use log::{debug, error, info};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Render targets shared with the change listener.
struct ScreenRenderer {
    adapter: TodoListAdapter,
    count: Box<dyn CountLabel>,
}

impl ScreenRenderer {
    fn render<R: TodoRepository>(&mut self, store: &TodoStore<R>) -> RepoResult<()> {
        let rows = store.get_all()?;
        let size = store.get_size()?;
        self.adapter.set_rows(rows);
        self.adapter.notify_data_set_changed();
        self.count.set_text(&size.to_string());
        Ok(())
    }
}

pub struct ScreenCoordinator<R: TodoRepository + 'static> {
    state: ScreenState,
    store: Rc<TodoStore<R>>,
    controller: InputController<R>,
    renderer: Rc<RefCell<ScreenRenderer>>,
    row_delete: EventChannel<RowDeleteRequested>,
    change_subscription: Option<Subscription<ChangedEvent>>,
}

impl<R: TodoRepository + 'static> ScreenCoordinator<R> {
    /// Binds widgets and wires the controller. The screen starts `Created`.
    ///
    /// The keyboard is configured to stay hidden when the screen is entered.
    pub fn create(store: Rc<TodoStore<R>>, widgets: ScreenWidgets) -> ScreenResult<Self> {
        let ScreenWidgets {
            input,
            submit,
            mut keyboard,
            list,
            count,
        } = widgets;

        keyboard.set_show_on_entry(false);
        let adapter = TodoListAdapter::new(store.get_all()?, list);
        let controller = InputController::new(Rc::clone(&store), input, submit, keyboard);

        info!("event=screen_transition module=screen status=ok to=created");
        Ok(Self {
            state: ScreenState::Created,
            store,
            controller,
            renderer: Rc::new(RefCell::new(ScreenRenderer { adapter, count })),
            row_delete: EventChannel::new("row_delete"),
            change_subscription: None,
        })
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn store(&self) -> &Rc<TodoStore<R>> {
        &self.store
    }

    /// Initializes the submit action and performs the first render.
    pub fn start(&mut self) -> ScreenResult<()> {
        self.transition(ScreenState::Started)?;
        self.controller.on_start();
        self.render()?;
        Ok(())
    }

    /// Enters the foreground: subscribes to store changes and row deletes.
    ///
    /// Also re-renders, so changes committed while paused become visible.
    pub fn resume(&mut self) -> ScreenResult<()> {
        self.transition(ScreenState::Resumed)?;

        let store = Rc::downgrade(&self.store);
        let renderer = Rc::clone(&self.renderer);
        self.change_subscription = Some(
            self.store
                .subscribe(move |event| rerender_on_change(&store, &renderer, event)),
        );
        self.controller.on_resume(&self.row_delete);
        self.render()?;
        Ok(())
    }

    /// Leaves the foreground: releases both subscriptions.
    pub fn pause(&mut self) -> ScreenResult<()> {
        self.transition(ScreenState::Paused)?;
        self.release_subscriptions();
        Ok(())
    }

    pub fn stop(&mut self) -> ScreenResult<()> {
        self.transition(ScreenState::Stopped)
    }

    /// Tears the screen down from any live state.
    ///
    /// Walks the remaining exit edges (pause, stop) so that subscriptions are
    /// released exactly as in an orderly shutdown.
    pub fn destroy(&mut self) -> ScreenResult<()> {
        if self.state == ScreenState::Resumed {
            self.pause()?;
        }
        if matches!(self.state, ScreenState::Started | ScreenState::Paused) {
            self.stop()?;
        }
        self.transition(ScreenState::Destroyed)
    }

    /// Redraws the list from `get_all()` and the count from `get_size()`.
    pub fn render(&self) -> RepoResult<()> {
        self.renderer.borrow_mut().render(&self.store)
    }

    /// Rows as last rendered.
    pub fn rendered_rows(&self) -> Vec<TodoItem> {
        self.renderer.borrow().adapter.rows().to_vec()
    }

    pub fn is_subscribed(&self) -> bool {
        self.change_subscription.is_some()
    }

    pub fn text_changed(&mut self) -> ScreenResult<()> {
        self.ensure_interactive()?;
        self.controller.on_text_changed();
        Ok(())
    }

    pub fn submit_clicked(&mut self) -> ScreenResult<SubmitOutcome> {
        self.ensure_interactive()?;
        Ok(self.controller.on_submit_clicked()?)
    }

    /// Returns whether the action was consumed (always `true` when handled).
    pub fn editor_action(&mut self, action: EditorAction) -> ScreenResult<bool> {
        self.ensure_interactive()?;
        Ok(self.controller.on_editor_action(action)?)
    }

    /// Emits a row-delete request for the row at `position`.
    ///
    /// Returns the targeted id, or `None` when no row is drawn there.
    pub fn request_row_delete(&mut self, position: usize) -> ScreenResult<Option<TodoId>> {
        self.ensure_interactive()?;
        let target = self.renderer.borrow().adapter.id_at(position);
        match target {
            Some(id) => {
                self.row_delete.publish(RowDeleteRequested { id });
                Ok(Some(id))
            }
            None => {
                debug!("event=row_delete module=screen status=skipped reason=no_row position={position}");
                Ok(None)
            }
        }
    }

    fn ensure_interactive(&self) -> ScreenResult<()> {
        if self.state.is_interactive() {
            Ok(())
        } else {
            Err(ScreenError::NotInteractive(self.state))
        }
    }

    fn transition(&mut self, to: ScreenState) -> ScreenResult<()> {
        let from = self.state;
        if !from.can_transition_to(to) {
            error!("event=screen_transition module=screen status=error from={from} to={to}");
            return Err(ScreenError::InvalidTransition { from, to });
        }
        self.state = to;
        info!("event=screen_transition module=screen status=ok from={from} to={to}");
        Ok(())
    }

    fn release_subscriptions(&mut self) {
        self.change_subscription = None;
        self.controller.on_pause();
    }
}

impl<R: TodoRepository + 'static> Drop for ScreenCoordinator<R> {
    fn drop(&mut self) {
        if self.state != ScreenState::Destroyed {
            debug!(
                "event=screen_drop module=screen status=early_teardown state={}",
                self.state
            );
        }
        self.release_subscriptions();
    }
}

fn rerender_on_change<R: TodoRepository>(
    store: &Weak<TodoStore<R>>,
    renderer: &RefCell<ScreenRenderer>,
    event: &ChangedEvent,
) {
    let Some(store) = store.upgrade() else {
        return;
    };
    debug!(
        "event=screen_render module=screen trigger={:?} id={}",
        event.kind, event.id
    );
    if let Err(err) = renderer.borrow_mut().render(&store) {
        error!("event=screen_render module=screen status=error error={err}");
    }
}
