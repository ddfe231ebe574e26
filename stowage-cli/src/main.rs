//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = stowage_cli::run() {
        eprintln!("stowage: {err}");
        std::process::exit(1);
    }
}
