//! Input delegate of the todo screen.
//!
//! # Responsibility
//! - Own the input field, the submit action and the soft keyboard.
//! - Turn user gestures into store calls without touching the screen.

pub mod input_controller;
