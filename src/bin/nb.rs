//! Short binary name (`nb`) that forwards to the `notes` library.
//! Keeping the alias as a real binary avoids shell alias requirements.

fn main() {
    if let Err(err) = notes::entry() {
        println!("{err}");
        std::process::exit(err.exit_code());
    }
}
