use crate::error::NotesError;
use crate::formatting::FormatContext;
use crate::prompt::Confirm;
use crate::session;
use crate::settings::{DEFAULT_NOTEBOOK, Settings};
use crate::store::{CreateOutcome, MoveOutcome, NotebookName, NotebookStore, State};

pub fn create(
    store: &NotebookStore,
    raw: &str,
    confirm: &mut dyn Confirm,
) -> Result<(), NotesError> {
    let name = NotebookName::parse(raw)?;
    match store.create(&name, confirm)? {
        CreateOutcome::Created => println!("Creating notebook {name}"),
        CreateOutcome::Restored => println!("Restored notebook {name}"),
        CreateOutcome::CreatedBesideDeleted => {
            println!(
                "Will not restore the deleted notebook {name} (you can still restore it using --restore until you delete this new notebook)"
            );
            println!("Creating notebook {name}");
        }
    }
    Ok(())
}

/// Print errors that only cancel the current action and carry on; others pass through.
pub fn recover(result: Result<(), NotesError>) -> Result<(), NotesError> {
    match result {
        Err(err) if err.aborts_action_only() => {
            println!("{err}");
            Ok(())
        }
        other => other,
    }
}

pub fn delete(
    store: &NotebookStore,
    raw: &str,
    confirm: &mut dyn Confirm,
) -> Result<(), NotesError> {
    let name = NotebookName::parse(raw)?;
    match store.delete(&name, confirm)? {
        MoveOutcome::Declined => {
            println!("Confirmation rejected, kept the deleted copy of {name}");
        }
        outcome => {
            if outcome == MoveOutcome::Overwrote {
                println!("Overwrote deleted notebook {name}");
            }
            println!("Notebook {name} deleted!");
            println!("(you can restore it using --restore)");
        }
    }
    Ok(())
}

pub fn restore(
    store: &NotebookStore,
    raw: &str,
    confirm: &mut dyn Confirm,
) -> Result<(), NotesError> {
    let name = NotebookName::parse(raw)?;
    match store.restore(&name, confirm)? {
        MoveOutcome::Declined => {
            println!("Confirmation rejected, kept the active notebook {name}");
        }
        outcome => {
            if outcome == MoveOutcome::Overwrote {
                println!("Overwrote notebook {name}");
            }
            println!("Notebook {name} restored!");
        }
    }
    Ok(())
}

/// Print one section of notebook names; returns how many were listed.
pub fn list(
    store: &NotebookStore,
    state: State,
    header: Option<&str>,
    fmt: &FormatContext,
) -> Result<usize, NotesError> {
    let names = store.list(state)?;
    if names.is_empty() {
        match header {
            Some(h) => println!("No {} notebooks found!", h.to_lowercase()),
            None => println!("No notebooks found!"),
        }
        return Ok(0);
    }

    let title = match header {
        Some(h) => format!("** {h} Notebooks **"),
        None => "** Notebooks **".to_string(),
    };
    println!("{}", fmt.format_header(&title));
    for name in &names {
        println!(" ~ {}", fmt.format_name(name));
    }
    Ok(names.len())
}

pub fn list_all(store: &NotebookStore, fmt: &FormatContext) -> Result<(), NotesError> {
    list(store, State::Active, Some("Active"), fmt)?;
    println!();
    list(store, State::Deleted, Some("Deleted"), fmt)?;
    Ok(())
}

pub fn show(
    store: &NotebookStore,
    raw: &str,
    count: i64,
    fmt: &FormatContext,
) -> Result<(), NotesError> {
    let name = NotebookName::parse(raw)?;
    store.require(&name, State::Active)?;
    println!("{}", fmt.notebook_banner(name.as_str()));
    for line in store.tail(&name, count)? {
        println!("{}", fmt.format_entry(&line));
    }
    Ok(())
}

pub fn set_default(
    store: &NotebookStore,
    settings: &mut Settings,
    raw: &str,
) -> Result<(), NotesError> {
    let name = NotebookName::parse(raw)?;
    store.require(&name, State::Active)?;
    settings.set(DEFAULT_NOTEBOOK, name.as_str());
    settings.save()?;
    println!("Set default notebook to {name}");
    Ok(())
}

pub fn write(
    store: &NotebookStore,
    settings: &Settings,
    raw: &str,
    fmt: &FormatContext,
) -> Result<(), NotesError> {
    let name = NotebookName::parse(raw)?;
    store.require(&name, State::Active)?;
    session::open(store, &name, settings.default_note_count()?, fmt)
}

pub fn rename(store: &NotebookStore, from: &str, to: &str) -> Result<(), NotesError> {
    let from = NotebookName::parse(from)?;
    let to = NotebookName::parse(to)?;
    store.rename(&from, &to)?;
    println!("Renamed notebook {from} to {to}");
    Ok(())
}

pub fn write_default(
    store: &NotebookStore,
    settings: &Settings,
    fmt: &FormatContext,
) -> Result<(), NotesError> {
    let raw = settings.default_notebook()?;
    println!("Opening default notebook, \"{raw}\"");
    let name = NotebookName::parse(raw)?;
    session::open(store, &name, settings.default_note_count()?, fmt)
}
