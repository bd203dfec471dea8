//! Core of the todo screen: store, input delegate and screen coordinator.
//! UI front ends bind their widgets here; all behavior lives in this crate.

pub mod config;
pub mod controller;
pub mod db;
pub mod event;
pub mod logging;
pub mod model;
pub mod repo;
pub mod screen;
pub mod store;
pub mod view;

pub use config::{AppConfig, StorageLocation};
pub use controller::input_controller::{
    EditorAction, InputController, KeyAction, KeyCode, SubmitOutcome,
};
pub use event::{ChangeKind, ChangedEvent, EventChannel, RowDeleteRequested, Subscription};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::todo::{TodoId, TodoItem};
pub use repo::memory_repo::MemoryTodoRepository;
pub use repo::todo_repo::{
    RepoError, RepoResult, SqliteTodoRepository, TodoRepository, WriteOutcome,
};
pub use screen::coordinator::ScreenCoordinator;
pub use screen::lifecycle::{ScreenError, ScreenResult, ScreenState};
pub use store::todo_store::TodoStore;
pub use view::{CountLabel, ListView, ScreenWidgets, SoftKeyboard, SubmitButton, TextField};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
