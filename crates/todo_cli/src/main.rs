//! Terminal front end for the todo screen.
//!
//! # Responsibility
//! - Bind terminal widgets to a `ScreenCoordinator` and drive its lifecycle.
//! - Translate stdin lines into the screen's input events.

mod cli;
mod command;
mod terminal;

use clap::Parser;
use cli::Cli;
use command::{Command, HELP};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::rc::Rc;
use terminal::{TerminalCountLabel, TerminalListView};
use todo_core::db::{open_db, open_db_in_memory};
use todo_core::view::memory::{MemoryButton, MemoryKeyboard, MemoryTextField};
use todo_core::{
    init_logging, AppConfig, EditorAction, ScreenCoordinator, ScreenResult, ScreenWidgets,
    SqliteTodoRepository, StorageLocation, SubmitButton, SubmitOutcome, TodoStore,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("todo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if cli.memory {
        config = config.in_memory();
    }
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir)?;
    }

    let conn = match &config.storage {
        StorageLocation::File(path) => open_db(path)?,
        StorageLocation::Memory => open_db_in_memory()?,
    };
    let store = Rc::new(TodoStore::new(SqliteTodoRepository::new(conn)));

    let input = MemoryTextField::default();
    let submit = MemoryButton::default();
    let widgets = ScreenWidgets {
        input: Box::new(input.clone()),
        submit: Box::new(submit.clone()),
        keyboard: Box::new(MemoryKeyboard::default()),
        list: Box::new(TerminalListView::new(io::stdout())),
        count: Box::new(TerminalCountLabel::new(io::stdout())),
    };

    let mut screen = ScreenCoordinator::create(store, widgets)?;
    screen.start()?;
    screen.resume()?;
    println!("todo {} - type a line to add it, :help for commands", todo_core::core_version());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        let result: ScreenResult<()> = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                Ok(())
            }
            Command::Submit(text) => {
                input.type_text(&text);
                screen
                    .text_changed()
                    .and_then(|()| screen.editor_action(EditorAction::Done))
                    .map(|_| ())
            }
            Command::Type(text) => {
                input.type_text(&text);
                screen.text_changed().map(|()| {
                    let state = if submit.is_enabled() { "enabled" } else { "disabled" };
                    println!("submit {state}");
                })
            }
            Command::Click => screen.submit_clicked().map(|outcome| {
                if outcome == SubmitOutcome::IgnoredEmpty {
                    println!("nothing to add");
                }
            }),
            Command::Remove(row) => screen.request_row_delete(row - 1).map(|target| {
                if target.is_none() {
                    println!("no row {row}");
                }
            }),
            Command::List => screen.render().map_err(Into::into),
        };

        if let Err(err) = result {
            println!("error: {err}");
        }
        io::stdout().flush()?;
    }

    screen.destroy()?;
    Ok(())
}
