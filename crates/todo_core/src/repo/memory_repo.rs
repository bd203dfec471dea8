//! Vec-backed repository used by tests and throwaway sessions.

use crate::model::todo::{TodoId, TodoItem};
use crate::repo::todo_repo::{RepoResult, TodoRepository, WriteOutcome};
use std::cell::RefCell;

/// In-memory todo repository with insertion-order semantics.
#[derive(Debug, Default)]
pub struct MemoryTodoRepository {
    rows: RefCell<Vec<TodoItem>>,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoRepository for MemoryTodoRepository {
    fn upsert(&self, item: &TodoItem) -> RepoResult<WriteOutcome> {
        let mut rows = self.rows.borrow_mut();
        match rows.iter_mut().find(|row| row.id == item.id) {
            Some(existing) => {
                existing.text.clone_from(&item.text);
                Ok(WriteOutcome::Updated)
            }
            None => {
                rows.push(item.clone());
                Ok(WriteOutcome::Inserted)
            }
        }
    }

    fn delete(&self, id: TodoId) -> RepoResult<bool> {
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok(rows.len() != before)
    }

    fn list(&self) -> RepoResult<Vec<TodoItem>> {
        Ok(self.rows.borrow().clone())
    }

    fn count(&self) -> RepoResult<usize> {
        Ok(self.rows.borrow().len())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryTodoRepository;
    use crate::model::todo::TodoItem;
    use crate::repo::todo_repo::{TodoRepository, WriteOutcome};

    #[test]
    fn upsert_overwrites_in_place() {
        let repo = MemoryTodoRepository::new();
        let first = TodoItem::new("first");
        let second = TodoItem::new("second");
        repo.upsert(&first).unwrap();
        repo.upsert(&second).unwrap();

        let outcome = repo
            .upsert(&TodoItem::with_id(first.id, "first, edited"))
            .unwrap();
        assert_eq!(outcome, WriteOutcome::Updated);

        let texts: Vec<String> = repo.list().unwrap().into_iter().map(|i| i.text).collect();
        assert_eq!(texts, vec!["first, edited", "second"]);
    }

    #[test]
    fn delete_reports_whether_a_row_matched() {
        let repo = MemoryTodoRepository::new();
        let item = TodoItem::new("gone soon");
        repo.upsert(&item).unwrap();

        assert!(repo.delete(item.id).unwrap());
        assert!(!repo.delete(item.id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
