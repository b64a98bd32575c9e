fn main() {
    if let Err(err) = notes::entry() {
        println!("{err}");
        std::process::exit(err.exit_code());
    }
}
