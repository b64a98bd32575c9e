use std::io::{self, BufRead, Write};

/// Yes/no confirmation used before any rename that would clobber a file.
pub trait Confirm {
    /// Ask `question`; only the literal answer `yes` confirms.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Reads answers from standard input, one line per question.
pub struct StdinPrompt;

impl Confirm for StdinPrompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let stdin = io::stdin();
        ask(question, &mut stdin.lock(), &mut io::stdout())
    }
}

fn ask(
    question: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<bool> {
    write!(output, "{question} (yes/no) ")?;
    output.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }
    Ok(is_yes(&answer))
}

pub(crate) fn is_yes(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']) == "yes"
}

/// Canned answers for exercising store paths without a terminal.
#[cfg(test)]
pub(crate) struct Scripted {
    answers: std::collections::VecDeque<bool>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl Scripted {
    pub fn new(answers: &[bool]) -> Self {
        Self { answers: answers.iter().copied().collect(), asked: Vec::new() }
    }
}

#[cfg(test)]
impl Confirm for Scripted {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}
