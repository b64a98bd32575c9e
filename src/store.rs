use crate::error::NotesError;
use crate::prompt::Confirm;
use chrono::Local;
use log::{debug, info};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const ENTRY_TIME_FMT: &str = "%d %B %Y @ %H:%M";
pub const CREATED_ENTRY: &str = "Notebook Created!";
const DELETED_MARKER: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Active,
    Deleted,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Active => f.write_str("active"),
            State::Deleted => f.write_str("deleted"),
        }
    }
}

/// Keep only alphanumeric characters.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// A notebook name that has already been through [`sanitize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookName(String);

impl NotebookName {
    pub fn parse(raw: &str) -> Result<Self, NotesError> {
        let clean = sanitize(raw);
        if clean.is_empty() {
            return Err(NotesError::EmptyName(raw.to_string()));
        }
        Ok(Self(clean))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotebookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// A soft-deleted copy existed and the user chose to bring it back.
    Restored,
    /// A soft-deleted copy existed, was kept, and a fresh notebook was created.
    CreatedBesideDeleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Overwrote,
    Declined,
}

pub fn entry_line(text: &str) -> String {
    let stamp = Local::now().format(ENTRY_TIME_FMT);
    let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    format!("[{stamp}] {text}")
}

pub struct NotebookStore {
    dir: PathBuf,
}

impl NotebookStore {
    /// Open the notebook directory, creating it when missing.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: &NotebookName, state: State) -> PathBuf {
        match state {
            State::Active => self.dir.join(name.as_str()),
            State::Deleted => self.dir.join(format!("{DELETED_MARKER}{name}")),
        }
    }

    pub fn exists(&self, name: &NotebookName, state: State) -> bool {
        self.path(name, state).is_file()
    }

    pub fn require(&self, name: &NotebookName, state: State) -> Result<(), NotesError> {
        if self.exists(name, state) {
            Ok(())
        } else {
            Err(NotesError::not_found(name.as_str(), state))
        }
    }

    pub fn create(
        &self,
        name: &NotebookName,
        confirm: &mut dyn Confirm,
    ) -> Result<CreateOutcome, NotesError> {
        if self.exists(name, State::Active) {
            return Err(NotesError::AlreadyExists(name.to_string()));
        }

        let mut outcome = CreateOutcome::Created;
        if self.exists(name, State::Deleted) {
            let question = format!(
                "Notebook {name} has been deleted, do you want to restore the deleted notebook?"
            );
            if confirm.confirm(&question)? {
                self.shift(name, State::Deleted, State::Active)?;
                return Ok(CreateOutcome::Restored);
            }
            outcome = CreateOutcome::CreatedBesideDeleted;
        }

        self.append(name, CREATED_ENTRY)?;
        info!("created notebook {name}");
        Ok(outcome)
    }

    pub fn delete(
        &self,
        name: &NotebookName,
        confirm: &mut dyn Confirm,
    ) -> Result<MoveOutcome, NotesError> {
        self.require(name, State::Active)?;
        self.move_guarded(
            name,
            State::Active,
            State::Deleted,
            &format!("Deleted notebook already exists for {name}. Do you wish to overwrite it?"),
            confirm,
        )
    }

    pub fn restore(
        &self,
        name: &NotebookName,
        confirm: &mut dyn Confirm,
    ) -> Result<MoveOutcome, NotesError> {
        self.require(name, State::Deleted)?;
        self.move_guarded(
            name,
            State::Deleted,
            State::Active,
            &format!("Notebook already exists for {name}. Do you wish to overwrite it?"),
            confirm,
        )
    }

    fn move_guarded(
        &self,
        name: &NotebookName,
        from: State,
        to: State,
        question: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<MoveOutcome, NotesError> {
        let mut outcome = MoveOutcome::Moved;
        if self.exists(name, to) {
            if !confirm.confirm(question)? {
                debug!("kept {to} copy of {name}");
                return Ok(MoveOutcome::Declined);
            }
            outcome = MoveOutcome::Overwrote;
        }
        self.shift(name, from, to)?;
        Ok(outcome)
    }

    fn shift(&self, name: &NotebookName, from: State, to: State) -> io::Result<()> {
        fs::rename(self.path(name, from), self.path(name, to))?;
        info!("moved notebook {name} from {from} to {to}");
        Ok(())
    }

    /// Rename an active notebook. An existing active `to` is replaced.
    pub fn rename(&self, from: &NotebookName, to: &NotebookName) -> Result<(), NotesError> {
        self.require(from, State::Active)?;
        fs::rename(self.path(from, State::Active), self.path(to, State::Active))?;
        info!("renamed notebook {from} to {to}");
        Ok(())
    }

    pub fn append(&self, name: &NotebookName, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path(name, State::Active))?;
        writeln!(file, "{}", entry_line(text))?;
        debug!("appended entry to {name}");
        Ok(())
    }

    /// Last `n` entries in file order, or every entry when `n <= 0`.
    pub fn tail(&self, name: &NotebookName, n: i64) -> io::Result<Vec<String>> {
        let raw = fs::read_to_string(self.path(name, State::Active))?;
        let lines: Vec<String> = raw.lines().map(str::to_string).collect();
        let skip = if n > 0 {
            lines.len().saturating_sub(n as usize)
        } else {
            0
        };
        Ok(lines.into_iter().skip(skip).collect())
    }

    pub fn list(&self, state: State) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let file_name = entry?.file_name().to_string_lossy().into_owned();
            match (state, file_name.starts_with(DELETED_MARKER)) {
                (State::Active, false) => names.push(file_name),
                (State::Deleted, true) => {
                    names.push(file_name[DELETED_MARKER.len_utf8()..].to_string())
                }
                _ => {}
            }
        }
        names.sort();
        Ok(names)
    }
}
