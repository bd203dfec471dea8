//! List adapter bridging store snapshots and a `ListView`.

use crate::model::todo::{TodoId, TodoItem};
use crate::view::ListView;

/// Holds the rows currently shown and redraws them on demand.
pub struct TodoListAdapter {
    rows: Vec<TodoItem>,
    view: Box<dyn ListView>,
    redraws: u64,
}

impl TodoListAdapter {
    pub fn new(rows: Vec<TodoItem>, view: Box<dyn ListView>) -> Self {
        Self {
            rows,
            view,
            redraws: 0,
        }
    }

    /// Replaces the backing rows without redrawing.
    pub fn set_rows(&mut self, rows: Vec<TodoItem>) {
        self.rows = rows;
    }

    /// Tells the view its data changed and redraws every row.
    pub fn notify_data_set_changed(&mut self) {
        self.redraws += 1;
        self.view.render_rows(&self.rows);
    }

    pub fn rows(&self) -> &[TodoItem] {
        &self.rows
    }

    /// Id of the row at `position`, as last drawn.
    pub fn id_at(&self, position: usize) -> Option<TodoId> {
        self.rows.get(position).map(|row| row.id)
    }

    /// How many times the view has been told to redraw.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }
}
