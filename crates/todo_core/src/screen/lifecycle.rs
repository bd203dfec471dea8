//! Screen lifecycle state machine.

use crate::repo::todo_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lifecycle state of one screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Created,
    Started,
    Resumed,
    Paused,
    Stopped,
    Destroyed,
}

impl ScreenState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Started => "started",
            Self::Resumed => "resumed",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
            Self::Destroyed => "destroyed",
        }
    }

    /// Legal lifecycle edges, including restart and early teardown.
    pub fn can_transition_to(self, next: ScreenState) -> bool {
        use ScreenState::*;
        matches!(
            (self, next),
            (Created, Started)
                | (Created, Destroyed)
                | (Started, Resumed)
                | (Started, Stopped)
                | (Resumed, Paused)
                | (Paused, Resumed)
                | (Paused, Stopped)
                | (Stopped, Started)
                | (Stopped, Destroyed)
        )
    }

    /// Only a resumed screen is in the foreground and accepts input.
    pub fn is_interactive(self) -> bool {
        self == Self::Resumed
    }
}

impl Display for ScreenState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type ScreenResult<T> = Result<T, ScreenError>;

#[derive(Debug)]
pub enum ScreenError {
    InvalidTransition {
        from: ScreenState,
        to: ScreenState,
    },
    /// User input arrived while the screen was not in the foreground.
    NotInteractive(ScreenState),
    Repo(RepoError),
}

impl Display for ScreenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { from, to } => {
                write!(f, "invalid screen transition: {from} -> {to}")
            }
            Self::NotInteractive(state) => {
                write!(f, "screen does not accept input while {state}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ScreenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ScreenError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

#[cfg(test)]
mod tests {
    use super::ScreenState::{self, *};

    const ALL: [ScreenState; 6] = [Created, Started, Resumed, Paused, Stopped, Destroyed];

    #[test]
    fn destroyed_is_terminal() {
        for next in ALL {
            assert!(!Destroyed.can_transition_to(next));
        }
    }

    #[test]
    fn resumed_can_only_pause() {
        let reachable: Vec<ScreenState> = ALL
            .into_iter()
            .filter(|next| Resumed.can_transition_to(*next))
            .collect();
        assert_eq!(reachable, vec![Paused]);
    }

    #[test]
    fn stopped_screen_can_restart() {
        assert!(Stopped.can_transition_to(Started));
        assert!(!Paused.can_transition_to(Started));
    }
}
