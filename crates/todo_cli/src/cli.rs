//! Command-line arguments.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(version = todo_core::core_version())]
#[command(about = "Terminal todo screen", long_about = None)]
pub struct Cli {
    /// Keep todos in an in-memory database instead of TODO_DB_PATH
    #[arg(long)]
    pub memory: bool,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn memory_flag_selects_in_memory_storage() {
        let cli = Cli::try_parse_from(["todo", "--memory"]).unwrap();
        assert!(cli.memory);
    }

    #[test]
    fn no_flags_keeps_configured_storage() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert!(!cli.memory);
    }

    #[test]
    fn misspelled_flag_is_rejected() {
        assert!(Cli::try_parse_from(["todo", "--memroy"]).is_err());
        assert!(Cli::try_parse_from(["todo", "memory"]).is_err());
    }
}
