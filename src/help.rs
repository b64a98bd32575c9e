#[derive(Clone, Copy)]
pub(crate) struct HelpFlag<'a> {
    pub name: &'a str,
    pub desc: &'a str,
}

const TITLE: &str = "Simple terminal-based notes utility!";
const USAGE: &str = "notes [flags]";

const FLAGS: &[HelpFlag<'static>] = &[
    HelpFlag { name: "-n, --new, --create <name>", desc: "Create a new notebook." },
    HelpFlag { name: "-w, --write <name>", desc: "Open a notebook for writing." },
    HelpFlag { name: "--default <name>", desc: "Set the notebook opened when no flags are given." },
    HelpFlag {
        name: "--delete <name>",
        desc: "Delete a notebook. Its entries are kept until you --restore it.",
    },
    HelpFlag { name: "--restore <name>", desc: "Restore a deleted notebook (see --listall)." },
    HelpFlag { name: "--rename <from> <to>", desc: "Rename a notebook." },
    HelpFlag {
        name: "-s, -d, --show <name>",
        desc: "Show a notebook's most recent entries (default_note_count from settings).",
    },
    HelpFlag { name: "-c <count>", desc: "Number of entries for --show; 0 or less shows all." },
    HelpFlag { name: "-l, --list", desc: "List active notebooks." },
    HelpFlag { name: "-la, --listall", desc: "List active and deleted notebooks." },
    HelpFlag { name: "-h, --help", desc: "Show this message." },
];

const ENVIRONMENT: &[HelpFlag<'static>] = &[
    HelpFlag {
        name: "NOTES_DIR",
        desc: "Directory holding `settings` and `notebooks/` (default: next to the executable)",
    },
    HelpFlag { name: "NOTES_LOG", desc: "Diagnostic log level on stderr (default: warn)" },
    HelpFlag { name: "NO_COLOR", desc: "Disable colored output" },
];

pub fn render() -> String {
    let width = FLAGS
        .iter()
        .chain(ENVIRONMENT)
        .map(|f| f.name.len())
        .max()
        .unwrap_or(0);

    let mut out = format!("{TITLE}\nRun with no flags to write to the default notebook.\n\nUsage:\n  {USAGE}\n\nFlags:\n");
    for flag in FLAGS {
        out.push_str(&format!("  {:<width$}  {}\n", flag.name, flag.desc));
    }
    out.push_str("\nEnvironment:\n");
    for var in ENVIRONMENT {
        out.push_str(&format!("  {:<width$}  {}\n", var.name, var.desc));
    }
    out
}

pub fn print_help() {
    print!("{}", render());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_flag_is_listed() {
        let text = render();
        for needle in ["--new", "--write", "--default", "--delete", "--restore", "--rename", "--show", "-c", "--listall", "NOTES_DIR"] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }
}
