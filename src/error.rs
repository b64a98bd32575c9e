use crate::store::State;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotesError {
    #[error("{}", not_found_message(.name, .state))]
    NotFound { name: String, state: State },

    #[error(
        "Notebook {0} already exists! Delete it by using --delete, or rename it by using --rename"
    )]
    AlreadyExists(String),

    #[error("Notebook name {0:?} has no letters or digits left after sanitizing")]
    EmptyName(String),

    #[error("Settings file not found at {}", .0.display())]
    SettingsMissing(PathBuf),

    #[error("Settings file is missing required key `{0}`")]
    MissingSetting(&'static str),

    #[error("Setting `{key}` has invalid value {value:?}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("{0}\nUse --help to list the available flags")]
    Usage(String),

    #[error("Could not install Ctrl-C handler: {0}")]
    Interrupt(#[from] ctrlc::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl NotesError {
    pub fn not_found(name: impl Into<String>, state: State) -> Self {
        NotesError::NotFound { name: name.into(), state }
    }

    /// Errors that cancel one action while later flags still run.
    pub fn aborts_action_only(&self) -> bool {
        matches!(self, NotesError::AlreadyExists(_) | NotesError::EmptyName(_))
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            NotesError::Usage(_) => 2,
            _ => 1,
        }
    }
}

fn not_found_message(name: &str, state: &State) -> String {
    match state {
        State::Active => format!(
            "Notebook {name} does not exist! Use --new to create it, or --list to list all notebooks"
        ),
        State::Deleted => format!(
            "Deleted notebook {name} does not exist! Use --listall to see deleted notebooks"
        ),
    }
}
