//! Interactive write session: read lines from the terminal and append each one
//! as an entry until Ctrl-C or end of input.

use crate::error::NotesError;
use crate::formatting::FormatContext;
use crate::store::{NotebookName, NotebookStore, State};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

pub const CLOSING: &str = "Closing notebook";

/// What the session loop receives: typed lines, end of input, or Ctrl-C.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Closed,
    Interrupted,
}

/// Open a session on stdin. Ctrl-C ends the session, not the process.
pub fn open(
    store: &NotebookStore,
    name: &NotebookName,
    recent: i64,
    fmt: &FormatContext,
) -> Result<(), NotesError> {
    let (tx, rx) = mpsc::channel();
    let interrupt = tx.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt.send(Input::Interrupted);
    })?;
    thread::spawn(move || read_lines(io::stdin().lock(), tx));
    run(store, name, recent, fmt, &rx)
}

/// Forward lines until end of input or until the session stops listening.
fn read_lines(mut input: impl BufRead, tx: Sender<Input>) {
    loop {
        let mut text = String::new();
        let message = match input.read_line(&mut text) {
            Ok(0) => Input::Closed,
            Ok(_) => Input::Line(text),
            Err(err) => {
                warn!("reading stdin failed: {err}");
                Input::Closed
            }
        };
        let closed = message == Input::Closed;
        if tx.send(message).is_err() || closed {
            break;
        }
    }
}

pub fn run(
    store: &NotebookStore,
    name: &NotebookName,
    recent: i64,
    fmt: &FormatContext,
    input: &Receiver<Input>,
) -> Result<(), NotesError> {
    println!("{}", fmt.notebook_banner(name.as_str()));
    println!("Use ^C to exit");

    if !store.exists(name, State::Active) {
        println!("Notebook does not exist! Create a notebook by using --new");
        return Ok(());
    }

    for line in store.tail(name, recent)? {
        println!("{}", fmt.format_entry(&line));
    }

    info!("session opened on {name}");
    let mut written = 0usize;
    loop {
        print!("> ");
        io::stdout().flush()?;
        let text = match input.recv() {
            Ok(Input::Line(text)) => text,
            Ok(Input::Interrupted) => {
                info!("session on {name} interrupted");
                println!();
                break;
            }
            Ok(Input::Closed) | Err(_) => {
                println!();
                break;
            }
        };
        store.append(name, text.trim_end_matches(['\r', '\n']))?;
        written += 1;
        for line in store.tail(name, 1)? {
            println!("{}", fmt.format_entry(&line));
        }
    }

    info!("session on {name} closed after {written} entr(ies)");
    println!("{CLOSING}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Scripted;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn diary(dir: &std::path::Path) -> (NotebookStore, NotebookName) {
        let store = NotebookStore::open(dir).unwrap();
        let name = NotebookName::parse("Diary").unwrap();
        store.create(&name, &mut Scripted::new(&[])).unwrap();
        (store, name)
    }

    #[test]
    fn appends_each_line_until_end_of_input() {
        let tmp = tempdir().unwrap();
        let (store, name) = diary(tmp.path());

        let (tx, rx) = mpsc::channel();
        read_lines(Cursor::new("first thought\r\nsecond thought\n"), tx);
        run(&store, &name, 5, &FormatContext::new(false), &rx).unwrap();

        let lines = store.tail(&name, 0).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("] first thought"));
        assert!(lines[2].ends_with("] second thought"));
    }

    #[test]
    fn interrupt_stops_the_loop_and_returns() {
        let tmp = tempdir().unwrap();
        let (store, name) = diary(tmp.path());

        let (tx, rx) = mpsc::channel();
        tx.send(Input::Line("kept\n".to_string())).unwrap();
        tx.send(Input::Interrupted).unwrap();
        tx.send(Input::Line("never written\n".to_string())).unwrap();
        assert!(run(&store, &name, 5, &FormatContext::new(false), &rx).is_ok());

        let lines = store.tail(&name, 0).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("] kept"));
    }

    #[test]
    fn reader_stops_at_end_of_input() {
        let (tx, rx) = mpsc::channel();
        read_lines(Cursor::new("one\n"), tx);
        let received: Vec<Input> = rx.iter().collect();
        assert_eq!(received, vec![Input::Line("one\n".to_string()), Input::Closed]);
    }

    #[test]
    fn missing_notebook_writes_nothing() {
        let tmp = tempdir().unwrap();
        let store = NotebookStore::open(tmp.path()).unwrap();
        let name = NotebookName::parse("Ghost").unwrap();

        let (tx, rx) = mpsc::channel();
        tx.send(Input::Line("ignored\n".to_string())).unwrap();
        run(&store, &name, 5, &FormatContext::new(false), &rx).unwrap();
        assert!(!store.exists(&name, State::Active));
        assert!(store.list(State::Active).unwrap().is_empty());
    }
}
