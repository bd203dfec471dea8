//! Widget contracts the todo screen renders into.
//!
//! # Responsibility
//! - Describe the minimal capabilities the controller and the coordinator
//!   need from a platform view layer.
//! - Provide in-memory widgets for tests and headless front ends.
//!
//! # Invariants
//! - Widgets never reach back into the store or the screen.

pub mod adapter;
pub mod memory;

use crate::model::todo::TodoItem;

/// Single-line text entry.
pub trait TextField {
    fn text(&self) -> String;
    /// Replaces the content; an empty string clears the field.
    fn set_text(&mut self, text: &str);
}

/// Button-style submit action that can be toggled.
pub trait SubmitButton {
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
}

/// On-screen keyboard attached to the input field.
pub trait SoftKeyboard {
    fn hide(&mut self);
    /// Controls whether the keyboard pops up when the screen is entered.
    fn set_show_on_entry(&mut self, show: bool);
}

/// Scrollable list the adapter draws rows into.
pub trait ListView {
    fn render_rows(&mut self, rows: &[TodoItem]);
}

/// Text label showing the item count.
pub trait CountLabel {
    fn set_text(&mut self, text: &str);
}

/// Every widget the todo screen binds at creation time.
pub struct ScreenWidgets {
    pub input: Box<dyn TextField>,
    pub submit: Box<dyn SubmitButton>,
    pub keyboard: Box<dyn SoftKeyboard>,
    pub list: Box<dyn ListView>,
    pub count: Box<dyn CountLabel>,
}
