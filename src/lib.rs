pub mod args;
pub mod commands;
pub mod error;
pub mod formatting;
pub mod help;
pub mod logging;
pub mod prompt;
pub mod session;
pub mod settings;
pub mod store;

pub use error::NotesError;

use crate::args::Invocation;
use crate::formatting::FormatContext;
use crate::prompt::StdinPrompt;
use crate::settings::Settings;
use crate::store::{NotebookStore, State};
use std::env;
use std::io;
use std::path::{Path, PathBuf};

pub const DIR_ENV: &str = "NOTES_DIR";
pub const SETTINGS_FILE: &str = "settings";
pub const NOTEBOOKS_DIR: &str = "notebooks";

pub fn entry() -> Result<(), NotesError> {
    let _logger = match logging::init() {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("logging disabled: {err}");
            None
        }
    };

    let inv = args::parse(env::args().skip(1).collect())?;
    if inv.help {
        help::print_help();
        return Ok(());
    }
    run(inv, &notes_dir()?)
}

/// Installation directory: `NOTES_DIR`, else the directory of the executable.
pub fn notes_dir() -> io::Result<PathBuf> {
    if let Ok(dir) = env::var(DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let exe = env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::other(format!("cannot locate install directory; set {DIR_ENV} explicitly"))
    })
}

/// Apply every requested action in the fixed order.
pub fn run(inv: Invocation, root: &Path) -> Result<(), NotesError> {
    let mut settings = Settings::load(root.join(SETTINGS_FILE))?;
    let store = NotebookStore::open(root.join(NOTEBOOKS_DIR))?;
    let fmt = FormatContext::from_env();
    let mut prompt = StdinPrompt;
    log::debug!("notebooks at {}", store.dir().display());

    if let Some(name) = &inv.new {
        commands::recover(commands::create(&store, name, &mut prompt))?;
    }
    if let Some(name) = &inv.delete {
        commands::recover(commands::delete(&store, name, &mut prompt))?;
    }
    if let Some(name) = &inv.restore {
        commands::recover(commands::restore(&store, name, &mut prompt))?;
    }
    if inv.list {
        commands::list(&store, State::Active, None, &fmt)?;
    }
    if inv.list_all {
        commands::list_all(&store, &fmt)?;
    }
    if let Some(name) = &inv.show {
        let count = match inv.count {
            Some(count) => count,
            None => settings.default_note_count()?,
        };
        commands::recover(commands::show(&store, name, count, &fmt))?;
    }
    if let Some(name) = &inv.default {
        commands::recover(commands::set_default(&store, &mut settings, name))?;
    }
    if let Some(name) = &inv.write {
        commands::recover(commands::write(&store, &settings, name, &fmt))?;
    }
    if let Some((from, to)) = &inv.rename {
        commands::recover(commands::rename(&store, from, to))?;
    }
    if inv.bare {
        commands::recover(commands::write_default(&store, &settings, &fmt))?;
    }
    Ok(())
}
