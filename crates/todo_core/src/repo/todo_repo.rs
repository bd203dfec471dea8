//! Todo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create-or-update, delete-by-id, list and count over `todos`.
//! - Reject persisted rows that cannot be mapped back to `TodoItem`.
//!
//! # Invariants
//! - Writes never validate text; empty input is filtered by callers.
//! - Deleting an absent id is not an error.

use crate::db::DbError;
use crate::model::todo::{TodoId, TodoItem};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for todo persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of one create-or-update write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No row shared the id; a new row was appended.
    Inserted,
    /// An existing row was overwritten in place.
    Updated,
}

/// Storage gateway for todo rows.
pub trait TodoRepository {
    /// Inserts `item`, or overwrites the row sharing its id.
    fn upsert(&self, item: &TodoItem) -> RepoResult<WriteOutcome>;
    /// Deletes the row with `id`. Returns `false` when nothing matched.
    fn delete(&self, id: TodoId) -> RepoResult<bool>;
    /// Returns all rows in storage order.
    fn list(&self) -> RepoResult<Vec<TodoItem>>;
    /// Returns the number of stored rows.
    fn count(&self) -> RepoResult<usize>;
}

/// SQLite-backed todo repository.
///
/// Owns its connection so that the store can outlive the opening scope.
pub struct SqliteTodoRepository {
    conn: Connection,
}

impl SqliteTodoRepository {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Gives back the underlying connection.
    pub fn into_inner(self) -> Connection {
        self.conn
    }
}

impl TodoRepository for SqliteTodoRepository {
    fn upsert(&self, item: &TodoItem) -> RepoResult<WriteOutcome> {
        let tx = self.conn.unchecked_transaction()?;
        let id = item.id.to_string();

        let changed = tx.execute(
            "UPDATE todos
             SET
                text = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![item.text.as_str(), id],
        )?;

        let outcome = if changed == 0 {
            tx.execute(
                "INSERT INTO todos (id, text) VALUES (?1, ?2);",
                params![id, item.text.as_str()],
            )?;
            WriteOutcome::Inserted
        } else {
            WriteOutcome::Updated
        };

        tx.commit()?;
        Ok(outcome)
    }

    fn delete(&self, id: TodoId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }

    fn list(&self) -> RepoResult<Vec<TodoItem>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, text FROM todos ORDER BY seq ASC;")?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_todo_row(row)?);
        }

        Ok(items)
    }

    fn count(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM todos;", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
    }
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<TodoItem> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{id_text}` in todos.id")))?;

    Ok(TodoItem {
        id,
        text: row.get("text")?,
    })
}
