use crate::error::NotesError;

/// Everything requested on one command line. Each flag keeps its last value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub new: Option<String>,
    pub write: Option<String>,
    pub default: Option<String>,
    pub delete: Option<String>,
    pub restore: Option<String>,
    pub rename: Option<(String, String)>,
    pub show: Option<String>,
    pub count: Option<i64>,
    pub list: bool,
    pub list_all: bool,
    pub help: bool,
    /// No arguments at all: open the default notebook.
    pub bare: bool,
}

pub struct ArgParser {
    iter: std::vec::IntoIter<String>,
    inline: Option<String>,
}

impl ArgParser {
    pub fn new(args: Vec<String>) -> Self {
        Self { iter: args.into_iter(), inline: None }
    }

    /// Next flag token, splitting `--flag=value` so the value is taken next.
    fn next_flag(&mut self) -> Option<String> {
        let arg = self.iter.next()?;
        if arg.starts_with("--") {
            if let Some((flag, value)) = arg.split_once('=') {
                self.inline = Some(value.to_string());
                return Some(flag.to_string());
            }
        }
        Some(arg)
    }

    /// Extract a string value for a flag
    pub fn extract_value(&mut self, flag: &str) -> Result<String, NotesError> {
        self.inline
            .take()
            .or_else(|| self.iter.next())
            .ok_or_else(|| NotesError::Usage(format!("Provide a value after {flag}")))
    }

    fn reject_inline(&mut self, flag: &str) -> Result<(), NotesError> {
        match self.inline.take() {
            Some(_) => Err(NotesError::Usage(format!("{flag} does not take a value"))),
            None => Ok(()),
        }
    }
}

pub fn parse(args: Vec<String>) -> Result<Invocation, NotesError> {
    let mut inv = Invocation { bare: args.is_empty(), ..Default::default() };
    let mut parser = ArgParser::new(args);

    while let Some(flag) = parser.next_flag() {
        match flag.as_str() {
            "--new" | "--create" | "-n" => inv.new = Some(parser.extract_value(&flag)?),
            "--write" | "-w" => inv.write = Some(parser.extract_value(&flag)?),
            "--default" => inv.default = Some(parser.extract_value(&flag)?),
            "--delete" => inv.delete = Some(parser.extract_value(&flag)?),
            "--restore" => inv.restore = Some(parser.extract_value(&flag)?),
            "--rename" => {
                let from = parser.extract_value(&flag)?;
                let to = parser.extract_value(&flag)?;
                inv.rename = Some((from, to));
            }
            "--show" | "-s" | "-d" => inv.show = Some(parser.extract_value(&flag)?),
            "-c" => {
                let raw = parser.extract_value(&flag)?;
                let count = raw.parse().map_err(|_| {
                    NotesError::Usage(format!("-c expects a whole number, got {raw:?}"))
                })?;
                inv.count = Some(count);
            }
            "--list" | "-l" => {
                parser.reject_inline(&flag)?;
                inv.list = true;
            }
            "--listall" | "-la" => {
                parser.reject_inline(&flag)?;
                inv.list_all = true;
            }
            "--help" | "-h" => {
                parser.reject_inline(&flag)?;
                inv.help = true;
            }
            other if other.starts_with('-') => {
                return Err(NotesError::Usage(format!("Unknown flag: {other}")));
            }
            other => {
                return Err(NotesError::Usage(format!("Unexpected argument: {other}")));
            }
        }
    }
    Ok(inv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_is_bare() {
        let inv = parse(Vec::new()).unwrap();
        assert!(inv.bare);
        assert_eq!(inv, Invocation { bare: true, ..Default::default() });
    }

    #[test]
    fn aliases_map_to_the_same_action() {
        for flag in ["--new", "--create", "-n"] {
            let inv = parse(args(&[flag, "Work"])).unwrap();
            assert_eq!(inv.new.as_deref(), Some("Work"));
            assert!(!inv.bare);
        }
        for flag in ["--show", "-s", "-d"] {
            let inv = parse(args(&[flag, "Work"])).unwrap();
            assert_eq!(inv.show.as_deref(), Some("Work"));
        }
        assert!(parse(args(&["-la"])).unwrap().list_all);
        assert!(parse(args(&["-l"])).unwrap().list);
    }

    #[test]
    fn combined_flags_and_inline_values() {
        let inv = parse(args(&[
            "--rename", "a", "b", "--show=Work", "-c", "-1", "--delete", "Old",
        ]))
        .unwrap();
        assert_eq!(inv.rename, Some(("a".to_string(), "b".to_string())));
        assert_eq!(inv.show.as_deref(), Some("Work"));
        assert_eq!(inv.count, Some(-1));
        assert_eq!(inv.delete.as_deref(), Some("Old"));
    }

    #[test]
    fn repeated_flag_keeps_last_value() {
        let inv = parse(args(&["-w", "one", "--write", "two"])).unwrap();
        assert_eq!(inv.write.as_deref(), Some("two"));
    }

    #[test]
    fn usage_errors() {
        for bad in [
            args(&["--new"]),
            args(&["--rename", "only"]),
            args(&["-c", "many"]),
            args(&["--bogus"]),
            args(&["stray"]),
            args(&["--list=yes"]),
        ] {
            assert!(matches!(parse(bad), Err(NotesError::Usage(_))));
        }
    }
}
