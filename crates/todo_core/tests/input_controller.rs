use std::rc::Rc;
use todo_core::view::memory::{MemoryButton, MemoryKeyboard, MemoryTextField};
use todo_core::{
    EditorAction, EventChannel, InputController, KeyAction, KeyCode, MemoryTodoRepository,
    RowDeleteRequested, SubmitButton, SubmitOutcome, TextField, TodoItem, TodoStore,
};

struct Fixture {
    store: Rc<TodoStore<MemoryTodoRepository>>,
    input: MemoryTextField,
    submit: MemoryButton,
    keyboard: MemoryKeyboard,
    controller: InputController<MemoryTodoRepository>,
}

fn fixture() -> Fixture {
    let store = Rc::new(TodoStore::new(MemoryTodoRepository::new()));
    let input = MemoryTextField::default();
    let submit = MemoryButton::default();
    let keyboard = MemoryKeyboard::default();
    let mut controller = InputController::new(
        Rc::clone(&store),
        Box::new(input.clone()),
        Box::new(submit.clone()),
        Box::new(keyboard.clone()),
    );
    controller.on_start();
    Fixture {
        store,
        input,
        submit,
        keyboard,
        controller,
    }
}

#[test]
fn start_disables_submit() {
    let fx = fixture();
    assert!(!fx.submit.is_enabled());
}

#[test]
fn text_changes_toggle_submit() {
    let mut fx = fixture();

    fx.input.type_text("B");
    fx.controller.on_text_changed();
    assert!(fx.submit.is_enabled());

    fx.input.type_text("");
    fx.controller.on_text_changed();
    assert!(!fx.submit.is_enabled());
}

#[test]
fn submit_stores_text_and_resets_widgets() {
    let mut fx = fixture();
    fx.keyboard.show();
    fx.input.type_text("Buy milk");
    fx.controller.on_text_changed();

    let outcome = fx.controller.on_submit_clicked().unwrap();
    let SubmitOutcome::Created(id) = outcome else {
        panic!("expected a created item, got {outcome:?}");
    };

    assert_eq!(fx.store.get_all().unwrap(), vec![TodoItem::with_id(id, "Buy milk")]);
    assert_eq!(fx.input.text(), "");
    assert!(!fx.keyboard.state().visible);
    assert_eq!(fx.keyboard.state().hide_calls, 1);
    assert!(!fx.submit.is_enabled());
}

#[test]
fn empty_submit_is_ignored_and_keeps_submit_disabled() {
    let mut fx = fixture();

    assert_eq!(
        fx.controller.on_submit_clicked().unwrap(),
        SubmitOutcome::IgnoredEmpty
    );
    assert_eq!(fx.store.get_size().unwrap(), 0);
    assert!(!fx.submit.is_enabled());
    assert_eq!(fx.keyboard.state().hide_calls, 0);
}

#[test]
fn editor_action_always_reports_consumed() {
    let mut fx = fixture();

    assert!(fx.controller.on_editor_action(EditorAction::Done).unwrap());
    assert_eq!(fx.store.get_size().unwrap(), 0);

    fx.input.type_text("Call Bob");
    let key_up = EditorAction::Key {
        code: KeyCode::Enter,
        action: KeyAction::Up,
    };
    assert!(fx.controller.on_editor_action(key_up).unwrap());
    assert_eq!(fx.store.get_size().unwrap(), 0);

    let key_down = EditorAction::Key {
        code: KeyCode::Enter,
        action: KeyAction::Down,
    };
    assert!(fx.controller.on_editor_action(key_down).unwrap());
    assert_eq!(fx.store.get_size().unwrap(), 1);
}

#[test]
fn row_delete_requests_are_forwarded_only_while_resumed() {
    let mut fx = fixture();
    let channel = EventChannel::<RowDeleteRequested>::new("row_delete");
    let first = TodoItem::new("first");
    let second = TodoItem::new("second");
    fx.store.create_or_update(&first).unwrap();
    fx.store.create_or_update(&second).unwrap();

    channel.publish(RowDeleteRequested { id: first.id });
    assert_eq!(fx.store.get_size().unwrap(), 2);

    fx.controller.on_resume(&channel);
    assert!(fx.controller.is_listening_for_row_deletes());
    channel.publish(RowDeleteRequested { id: first.id });
    assert_eq!(fx.store.get_all().unwrap(), vec![second.clone()]);

    fx.controller.on_pause();
    assert_eq!(channel.listener_count(), 0);
    channel.publish(RowDeleteRequested { id: second.id });
    assert_eq!(fx.store.get_size().unwrap(), 1);
}

#[test]
fn direct_row_delete_reports_absent_ids() {
    let fx = fixture();
    let item = TodoItem::new("once");
    fx.store.create_or_update(&item).unwrap();

    assert!(fx.controller.on_row_delete_requested(item.id).unwrap());
    assert!(!fx.controller.on_row_delete_requested(item.id).unwrap());
}
