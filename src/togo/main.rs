mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        if e.is_missing_file() {
            eprintln!("Run `togo init` to create an empty todo file.");
        }
        std::process::exit(1);
    }
}
