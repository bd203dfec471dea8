//! Widgets that draw into a terminal stream.

use log::warn;
use std::io::Write;
use todo_core::{CountLabel, ListView, TodoItem};

pub struct TerminalListView<W: Write> {
    out: W,
}

impl<W: Write> TerminalListView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ListView for TerminalListView<W> {
    fn render_rows(&mut self, rows: &[TodoItem]) {
        let mut text = String::new();
        if rows.is_empty() {
            text.push_str("  (no todos)\n");
        }
        for (index, row) in rows.iter().enumerate() {
            text.push_str(&format!("  {:>2}. {}\n", index + 1, row.text));
        }
        if let Err(err) = self.out.write_all(text.as_bytes()) {
            warn!("event=render_rows module=cli status=error error={err}");
        }
    }
}

pub struct TerminalCountLabel<W: Write> {
    out: W,
}

impl<W: Write> TerminalCountLabel<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> CountLabel for TerminalCountLabel<W> {
    fn set_text(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "  count: {text}") {
            warn!("event=render_count module=cli status=error error={err}");
        }
    }
}
