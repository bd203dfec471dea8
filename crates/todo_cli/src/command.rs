//! Line commands understood by the terminal front end.

pub const HELP: &str = "\
<text>     type <text> and press done
:type <t>  type <t> without submitting
:add       tap the submit button
:rm <n>    delete row <n> (as numbered in the list)
:list      redraw the list
:quit      leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Type(String),
    Click,
    /// 1-based row number.
    Remove(usize),
    List,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = trimmed.strip_prefix(':') else {
            return Ok(Self::Submit(trimmed.to_string()));
        };

        let (name, argument) = match rest.split_once(' ') {
            Some((name, argument)) => (name, argument),
            None => (rest, ""),
        };
        match name {
            "type" => Ok(Self::Type(argument.to_string())),
            "add" => Ok(Self::Click),
            "rm" => match argument.trim().parse::<usize>() {
                Ok(row) if row > 0 => Ok(Self::Remove(row)),
                _ => Err(format!("expected a row number, got `{}`", argument.trim())),
            },
            "list" => Ok(Self::List),
            "help" => Ok(Self::Help),
            "quit" | "q" => Ok(Self::Quit),
            other => Err(format!("unknown command `:{other}`, try :help")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn plain_lines_are_submitted_verbatim() {
        assert_eq!(
            Command::parse("Buy milk\n").unwrap(),
            Command::Submit("Buy milk".to_string())
        );
        assert_eq!(Command::parse("").unwrap(), Command::Submit(String::new()));
    }

    #[test]
    fn commands_parse_arguments() {
        assert_eq!(
            Command::parse(":type Call Bob").unwrap(),
            Command::Type("Call Bob".to_string())
        );
        assert_eq!(Command::parse(":rm 2").unwrap(), Command::Remove(2));
        assert_eq!(Command::parse(":q").unwrap(), Command::Quit);
    }

    #[test]
    fn bad_row_numbers_are_rejected() {
        assert!(Command::parse(":rm 0").is_err());
        assert!(Command::parse(":rm two").is_err());
        assert!(Command::parse(":nope").is_err());
    }
}
