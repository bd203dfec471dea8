use todo_core::db::open_db_in_memory;
use todo_core::{RepoError, SqliteTodoRepository, TodoItem, TodoRepository, WriteOutcome};

fn repo() -> SqliteTodoRepository {
    SqliteTodoRepository::new(open_db_in_memory().unwrap())
}

#[test]
fn upsert_inserts_then_updates_in_place() {
    let repo = repo();
    let first = TodoItem::new("Call Bob");
    let second = TodoItem::new("Buy milk");

    assert_eq!(repo.upsert(&first).unwrap(), WriteOutcome::Inserted);
    assert_eq!(repo.upsert(&second).unwrap(), WriteOutcome::Inserted);
    assert_eq!(
        repo.upsert(&TodoItem::with_id(first.id, "Call Bob tonight"))
            .unwrap(),
        WriteOutcome::Updated
    );

    let items = repo.list().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, first.id);
    assert_eq!(items[0].text, "Call Bob tonight");
    assert_eq!(items[1], second);
}

#[test]
fn list_follows_insertion_order() {
    let repo = repo();
    let texts = ["one", "two", "three", "four"];
    for text in texts {
        repo.upsert(&TodoItem::new(text)).unwrap();
    }

    let listed: Vec<String> = repo.list().unwrap().into_iter().map(|i| i.text).collect();
    assert_eq!(listed, texts);
}

#[test]
fn delete_present_and_absent_ids() {
    let repo = repo();
    let item = TodoItem::new("short lived");
    repo.upsert(&item).unwrap();

    assert!(repo.delete(item.id).unwrap());
    assert!(!repo.delete(item.id).unwrap());
    assert_eq!(repo.count().unwrap(), 0);
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn count_matches_list_length() {
    let repo = repo();
    for text in ["a", "b", "c"] {
        repo.upsert(&TodoItem::new(text)).unwrap();
    }
    assert_eq!(repo.count().unwrap(), repo.list().unwrap().len());
}

#[test]
fn corrupt_id_is_reported_as_invalid_data() {
    let repo = repo();
    let conn = repo.into_inner();
    conn.execute(
        "INSERT INTO todos (id, text) VALUES ('not-a-uuid', 'broken');",
        [],
    )
    .unwrap();

    let repo = SqliteTodoRepository::new(conn);
    let err = repo.list().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("not-a-uuid")));
}
