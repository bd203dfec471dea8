//! In-memory widgets.
//!
//! Every widget is a cloneable handle over shared state, so a caller can hand
//! one clone to the screen and keep another to observe what was rendered.

use crate::model::todo::TodoItem;
use crate::view::{CountLabel, ListView, ScreenWidgets, SoftKeyboard, SubmitButton, TextField};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct MemoryTextField {
    text: Rc<RefCell<String>>,
}

impl MemoryTextField {
    /// Simulates the user typing: replaces the content.
    pub fn type_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

impl TextField for MemoryTextField {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&mut self, text: &str) {
        self.type_text(text);
    }
}

#[derive(Debug, Clone)]
pub struct MemoryButton {
    enabled: Rc<RefCell<bool>>,
}

impl Default for MemoryButton {
    /// Platform buttons start enabled until the screen says otherwise.
    fn default() -> Self {
        Self {
            enabled: Rc::new(RefCell::new(true)),
        }
    }
}

impl SubmitButton for MemoryButton {
    fn is_enabled(&self) -> bool {
        *self.enabled.borrow()
    }

    fn set_enabled(&mut self, enabled: bool) {
        *self.enabled.borrow_mut() = enabled;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    pub visible: bool,
    pub show_on_entry: bool,
    pub hide_calls: u32,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryKeyboard {
    state: Rc<RefCell<KeyboardState>>,
}

impl MemoryKeyboard {
    /// Simulates the user focusing the input field.
    pub fn show(&self) {
        self.state.borrow_mut().visible = true;
    }

    pub fn state(&self) -> KeyboardState {
        *self.state.borrow()
    }
}

impl SoftKeyboard for MemoryKeyboard {
    fn hide(&mut self) {
        let mut state = self.state.borrow_mut();
        state.visible = false;
        state.hide_calls += 1;
    }

    fn set_show_on_entry(&mut self, show: bool) {
        self.state.borrow_mut().show_on_entry = show;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryListView {
    rows: Rc<RefCell<Vec<TodoItem>>>,
    renders: Rc<RefCell<u32>>,
}

impl MemoryListView {
    pub fn rows(&self) -> Vec<TodoItem> {
        self.rows.borrow().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.rows.borrow().iter().map(|row| row.text.clone()).collect()
    }

    pub fn render_count(&self) -> u32 {
        *self.renders.borrow()
    }
}

impl ListView for MemoryListView {
    fn render_rows(&mut self, rows: &[TodoItem]) {
        *self.rows.borrow_mut() = rows.to_vec();
        *self.renders.borrow_mut() += 1;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryLabel {
    text: Rc<RefCell<String>>,
}

impl MemoryLabel {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl CountLabel for MemoryLabel {
    fn set_text(&mut self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

/// Observer handles for a screen built by `MemoryWidgets::bind`.
#[derive(Debug, Clone, Default)]
pub struct MemoryWidgets {
    pub input: MemoryTextField,
    pub submit: MemoryButton,
    pub keyboard: MemoryKeyboard,
    pub list: MemoryListView,
    pub count: MemoryLabel,
}

impl MemoryWidgets {
    /// Returns boxed clones suitable for `ScreenCoordinator::create`.
    pub fn bind(&self) -> ScreenWidgets {
        ScreenWidgets {
            input: Box::new(self.input.clone()),
            submit: Box::new(self.submit.clone()),
            keyboard: Box::new(self.keyboard.clone()),
            list: Box::new(self.list.clone()),
            count: Box::new(self.count.clone()),
        }
    }
}
